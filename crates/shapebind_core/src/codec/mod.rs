mod compression;
mod document;
mod error;
/// JSON adapter over `serde_json`.
pub mod json;

/// Compression detection and framing.
pub use compression::{Compression, ZSTD_MAGIC, decode_bytes, encode_bytes};
/// Decoded document with its source framing.
pub use document::Document;
/// Error and result aliases.
pub use error::{CodecError, Result};
