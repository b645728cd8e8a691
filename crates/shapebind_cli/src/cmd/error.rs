use shapebind::bind::BindError;
use shapebind::codec::CodecError;
use thiserror::Error;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Document or schema codec failure.
	#[error(transparent)]
	Codec(#[from] CodecError),
	/// Binding, unbinding, or schema validation failure.
	#[error(transparent)]
	Bind(#[from] BindError),
	/// Writing command output failed.
	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),
	/// Output JSON could not be rendered.
	#[error("json output error: {0}")]
	Json(#[from] serde_json::Error),
	/// `--type` named a type the schema does not declare.
	#[error("schema declares no type named {name}")]
	UnknownType {
		/// Requested type name.
		name: String,
	},
	/// `--explain` needs a map at the document root.
	#[error("cannot explain a document whose root is {kind}, expected map")]
	RootNotMap {
		/// Root value kind label.
		kind: &'static str,
	},
}
