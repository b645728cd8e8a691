use std::path::Path;

use shapebind::bind::{Registry, Schema, Value};
use tracing::debug;

use crate::cmd::Result;

/// Load a schema file and build its registry.
pub fn load_registry(path: &Path) -> Result<Registry> {
	let bytes = std::fs::read(path)?;
	let registry = Schema::from_json(&bytes)?.into_registry()?;
	debug!(path = %path.display(), types = registry.len(), "loaded schema");
	Ok(registry)
}

/// Short description of a tree root: the bound type name or the value kind.
pub fn root_label(value: &Value) -> String {
	match value.as_object() {
		Some(object) => format!("object {}", object.type_name()),
		None => value.kind().as_str().to_owned(),
	}
}

/// Print a rendered JSON value to stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}
