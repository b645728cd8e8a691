use std::path::PathBuf;

use shapebind::bind::TypeDescriptor;

use crate::cmd::util::{load_registry, print_json};
use crate::cmd::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long = "type")]
	pub type_name: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Validate a schema file and list its types in candidate order.
pub fn run(args: Args) -> Result<()> {
	let Args { path, type_name, json } = args;

	let registry = load_registry(&path)?;
	let types: Vec<&'static TypeDescriptor> = match type_name {
		Some(name) => vec![registry.get(&name).ok_or(CliError::UnknownType { name })?],
		None => registry.candidates().to_vec(),
	};

	if json {
		let rows: Vec<TypeJson> = types.iter().copied().map(TypeJson::from_descriptor).collect();
		return print_json(&SchemaJson {
			path: path.display().to_string(),
			types: rows,
		});
	}

	println!("path: {}", path.display());
	println!("types: {}", types.len());
	for descriptor in types {
		println!("{}", descriptor.name);
		for field in descriptor.fields {
			let mut flags = Vec::new();
			if field.optional {
				flags.push("optional");
			}
			if descriptor.is_ignored(field.name) {
				flags.push("ignored");
			}
			if descriptor.is_flexible(field.name) {
				flags.push("flexible");
			}
			if descriptor.is_manual(field.name) {
				flags.push("manual");
			}

			if flags.is_empty() {
				println!("  {}: {}", field.name, field.kind);
			} else {
				println!("  {}: {} ({})", field.name, field.kind, flags.join(", "));
			}
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct SchemaJson {
	path: String,
	types: Vec<TypeJson>,
}

#[derive(serde::Serialize)]
struct TypeJson {
	name: &'static str,
	fields: Vec<FieldJson>,
	ignored: &'static [&'static str],
	flexible: &'static [&'static str],
	manual: &'static [&'static str],
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: &'static str,
	kind: String,
	optional: bool,
}

impl TypeJson {
	fn from_descriptor(descriptor: &'static TypeDescriptor) -> Self {
		Self {
			name: descriptor.name,
			fields: descriptor
				.fields
				.iter()
				.map(|field| FieldJson {
					name: field.name,
					kind: field.kind.to_string(),
					optional: field.optional,
				})
				.collect(),
			ignored: descriptor.ignored,
			flexible: descriptor.flexible,
			manual: descriptor.manual,
		}
	}
}
