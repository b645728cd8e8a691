use thiserror::Error;

use crate::bind::BindError;

/// Crate-local codec result type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while converting between bytes and value trees.
#[derive(Debug, Error)]
pub enum CodecError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Malformed JSON input, or JSON that does not fit the expected structure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// A document's top-level entity was not an object or an array.
	#[error("top-level {kind} is not a document (expected object or array)")]
	TopLevelScalar {
		/// Kind label of the top-level value.
		kind: &'static str,
	},
	/// An opaque native value cannot be encoded.
	#[error("cannot encode opaque value of type {type_name}")]
	Opaque {
		/// Rust type name of the opaque value.
		type_name: &'static str,
	},
	/// NaN and infinities have no JSON representation.
	#[error("cannot encode non-finite float {value}")]
	NonFiniteFloat {
		/// Offending value.
		value: f64,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Binding or unbinding failed.
	#[error(transparent)]
	Bind(#[from] BindError),
}
