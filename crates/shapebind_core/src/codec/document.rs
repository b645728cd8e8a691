use std::fs;
use std::path::Path;

use crate::bind::Value;
use crate::codec::{Compression, Result, decode_bytes, encode_bytes, json};

/// JSON document decoded into a value tree, with the framing it was read from.
#[derive(Debug, Clone)]
pub struct Document {
	/// Compression mode detected for source bytes.
	pub compression: Compression,
	/// Decoded tree.
	pub value: Value,
}

impl Document {
	/// Read, decompress, and decode a document from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::from_bytes(raw)
	}

	/// Decompress and decode an in-memory document.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		let value = json::decode(&bytes)?;
		Ok(Self { compression, value })
	}

	/// Encode `value` as JSON with the requested framing.
	pub fn encode(value: &Value, compression: Compression, pretty: bool) -> Result<Vec<u8>> {
		let bytes = if pretty { json::encode_pretty(value)? } else { json::encode(value)? };
		encode_bytes(bytes, compression)
	}

	/// Encode `value` and write it to disk.
	pub fn write(path: impl AsRef<Path>, value: &Value, compression: Compression, pretty: bool) -> Result<()> {
		let bytes = Self::encode(value, compression, pretty)?;
		fs::write(path, bytes)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests;
