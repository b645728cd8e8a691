use std::path::PathBuf;

use shapebind::bind::{CandidateVerdict, Explanation, Registry, Value, ValueMap, explain};
use shapebind::codec::Document;

use crate::cmd::print::{PrintOptions, print_tree};
use crate::cmd::render::value_to_json;
use crate::cmd::util::{load_registry, print_json, root_label};
use crate::cmd::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub schema: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long)]
	pub explain: bool,
}

/// Bind a document against a schema and print the bound tree.
pub fn run(args: Args) -> Result<()> {
	let Args { path, schema, json, explain } = args;

	let registry = load_registry(&schema)?;
	let document = Document::open(&path)?;

	let (bound, explanation) = if explain {
		let (bound, explanation) = bind_explained(&registry, document.value)?;
		(bound, Some(explanation))
	} else {
		(registry.bind(document.value)?, None)
	};

	if json {
		return print_json(&BindJson {
			path: path.display().to_string(),
			schema: schema.display().to_string(),
			root: root_label(&bound),
			explain: explanation.as_ref().map(verdict_rows),
			value: value_to_json(&bound),
		});
	}

	println!("path: {}", path.display());
	println!("schema: {}", schema.display());
	println!("root: {}", root_label(&bound));
	if let Some(explanation) = &explanation {
		println!("candidates:");
		for row in verdict_rows(explanation) {
			println!("  {}", row.summary());
		}
	}
	print_tree(&bound, PrintOptions::default());
	Ok(())
}

/// Bind the root's children, explain the root map against every candidate, then bind the root.
fn bind_explained(registry: &Registry, value: Value) -> Result<(Value, Explanation)> {
	let map = match value {
		Value::Map(map) => map,
		other => {
			return Err(CliError::RootNotMap {
				kind: other.kind().as_str(),
			});
		}
	};

	let converted = map
		.into_iter()
		.map(|(key, value)| registry.bind(value).map(|value| (key, value)))
		.collect::<shapebind::bind::Result<ValueMap>>()?;
	let explanation = explain(&converted, registry.candidates());
	let bound = registry.bind(Value::Map(converted))?;
	Ok((bound, explanation))
}

fn verdict_rows(explanation: &Explanation) -> Vec<VerdictJson> {
	explanation
		.verdicts
		.iter()
		.map(|(descriptor, verdict)| {
			let mut row = VerdictJson {
				candidate: descriptor.name,
				verdict: verdict.as_str(),
				selected: explanation.selected.is_some_and(|found| std::ptr::eq(found.descriptor, *descriptor)),
				extra_keys: None,
				missing: None,
				field: None,
				expected: None,
				got: None,
			};
			match verdict {
				CandidateVerdict::Missing { fields } => row.missing = Some(fields.clone()),
				CandidateVerdict::Pruned { extra_keys } | CandidateVerdict::Accepted { extra_keys } => row.extra_keys = Some(*extra_keys),
				CandidateVerdict::Incompatible { field, expected, got } => {
					row.field = Some(*field);
					row.expected = Some(expected.to_string());
					row.got = Some(got.as_str());
				}
				CandidateVerdict::NotReached => {}
			}
			row
		})
		.collect()
}

#[derive(serde::Serialize)]
struct BindJson {
	path: String,
	schema: String,
	root: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	explain: Option<Vec<VerdictJson>>,
	value: serde_json::Value,
}

#[derive(serde::Serialize)]
struct VerdictJson {
	candidate: &'static str,
	verdict: &'static str,
	selected: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	extra_keys: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	missing: Option<Vec<&'static str>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	field: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	expected: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	got: Option<&'static str>,
}

impl VerdictJson {
	fn summary(&self) -> String {
		let mut out = format!("{}: {}", self.candidate, self.verdict);
		if let Some(extra_keys) = self.extra_keys {
			out.push_str(&format!(" extra_keys={extra_keys}"));
		}
		if let Some(missing) = &self.missing {
			out.push_str(&format!(" missing={}", missing.join(",")));
		}
		if let (Some(field), Some(expected), Some(got)) = (self.field, &self.expected, self.got) {
			out.push_str(&format!(" field={field} expected={expected} got={got}"));
		}
		if self.selected {
			out.push_str(" (selected)");
		}
		out
	}
}

#[cfg(test)]
mod tests;
