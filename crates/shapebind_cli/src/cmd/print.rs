use std::fmt::Write;

use shapebind::bind::{Record, Value, unbind};

/// Output truncation limits for printed trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for one map or object.
	pub max_fields: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum nesting depth printed before eliding.
	pub max_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_depth: 8,
		}
	}
}

/// Render a tree as indented text.
pub fn render_tree(value: &Value, options: PrintOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, 0, 0, options);
	out
}

/// Print a tree to stdout.
pub fn print_tree(value: &Value, options: PrintOptions) {
	print!("{}", render_tree(value, options));
}

fn write_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Array(items) => {
			if depth >= options.max_depth {
				let _ = writeln!(out, "{pad}[... {} items]", items.len());
				return;
			}
			let _ = writeln!(out, "{pad}[");
			for item in items.iter().take(options.max_array_items) {
				write_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				let _ = writeln!(out, "{pad}  ... {} more", items.len() - options.max_array_items);
			}
			let _ = writeln!(out, "{pad}]");
		}
		Value::Map(map) => {
			let entries: Vec<(&str, &Value)> = map.iter().map(|(key, value)| (key.as_str(), value)).collect();
			write_entries(out, "{", &entries, indent, depth, options);
		}
		Value::Object(object) => {
			let open = format!("{} {{", object.type_name());
			if let Some(record) = object.downcast_ref::<Record>() {
				let entries: Vec<(&str, &Value)> = record.values().iter().map(|(key, value)| (key.as_str(), value)).collect();
				write_entries(out, &open, &entries, indent, depth, options);
				return;
			}
			match unbind(object.get()) {
				Ok(Value::Map(map)) => {
					let entries: Vec<(&str, &Value)> = map.iter().map(|(key, value)| (key.as_str(), value)).collect();
					write_entries(out, &open, &entries, indent, depth, options);
				}
				Ok(_) => {
					let _ = writeln!(out, "{pad}{open} ... }}");
				}
				Err(err) => {
					let _ = writeln!(out, "{pad}{open} <{err}> }}");
				}
			}
		}
		scalar => {
			let _ = writeln!(out, "{pad}{}", format_scalar(scalar, options));
		}
	}
}

fn write_entries(out: &mut String, open: &str, entries: &[(&str, &Value)], indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	if depth >= options.max_depth {
		let _ = writeln!(out, "{pad}{open} ... }}");
		return;
	}

	let _ = writeln!(out, "{pad}{open}");
	for (key, value) in entries.iter().take(options.max_fields) {
		if matches!(value, Value::Array(_) | Value::Map(_) | Value::Object(_)) {
			let _ = writeln!(out, "{pad}  {key} =");
			write_value(out, value, indent + 4, depth + 1, options);
		} else {
			let _ = writeln!(out, "{pad}  {key} = {}", format_scalar(value, options));
		}
	}
	if entries.len() > options.max_fields {
		let _ = writeln!(out, "{pad}  ... {} more fields", entries.len() - options.max_fields);
	}
	let _ = writeln!(out, "{pad}}}");
}

fn format_scalar(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::Null => "null".to_owned(),
		Value::Bool(v) => v.to_string(),
		Value::I64(v) => v.to_string(),
		Value::F64(v) => format!("{v:?}"),
		Value::String(v) => format!("\"{}\"", truncate(v, options.max_string_len)),
		Value::Opaque(v) => format!("<opaque {}>", v.type_name()),
		other => other.kind().as_str().to_owned(),
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let mut out: String = input.chars().take(max_len).collect();
	out.push_str("...");
	out
}
