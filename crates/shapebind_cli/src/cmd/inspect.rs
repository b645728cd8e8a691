use std::path::PathBuf;

use shapebind::codec::Document;

use crate::cmd::Result;
use crate::cmd::print::{PrintOptions, print_tree};
use crate::cmd::render::value_to_json;
use crate::cmd::util::{print_json, root_label};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Decode a document and print its plain tree.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let document = Document::open(&path)?;
	let entries = document
		.value
		.as_map()
		.map(|map| map.len())
		.or_else(|| document.value.as_array().map(|items| items.len()))
		.unwrap_or(0);

	if json {
		return print_json(&InspectJson {
			path: path.display().to_string(),
			compression: document.compression.as_str(),
			root: root_label(&document.value),
			entries,
			value: value_to_json(&document.value),
		});
	}

	println!("path: {}", path.display());
	println!("compression: {}", document.compression.as_str());
	println!("root: {}", root_label(&document.value));
	println!("entries: {entries}");
	print_tree(&document.value, PrintOptions::default());
	Ok(())
}

#[derive(serde::Serialize)]
struct InspectJson {
	path: String,
	compression: &'static str,
	root: String,
	entries: usize,
	value: serde_json::Value,
}
