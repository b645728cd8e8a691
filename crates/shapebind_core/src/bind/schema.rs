use std::collections::BTreeMap;

use serde::Deserialize;

use crate::bind::record::register_manual_literals;
use crate::bind::{BindError, FieldDescriptor, FieldKind, Record, Registry, Result, TypeDescriptor, ValueMap};
use crate::codec;

/// Descriptor declarations loaded at runtime, bound through [`Record`].
///
/// ```json
/// { "types": [ { "name": "Point", "fields": [ { "name": "x", "kind": "float" } ] } ] }
/// ```
///
/// Field kinds are `bool`, `int`, `float`, `string`, `map`, `any`, `[<kind>]`, or the name of
/// another type declared in the same schema. `manual` maps field names to the JSON literal
/// emitted for them on unbind, e.g. `"manual": { "version": 2 }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
	/// Types in candidate order.
	pub types: Vec<TypeSchema>,
}

/// One declared type.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeSchema {
	/// Type name.
	pub name: String,
	/// Declared fields in serialization order.
	pub fields: Vec<FieldSchema>,
	/// Ignored field names.
	#[serde(default)]
	pub ignored: Vec<String>,
	/// Flexible field names.
	#[serde(default)]
	pub flexible: Vec<String>,
	/// Manual field names and the literal each one unbinds to.
	#[serde(default)]
	pub manual: BTreeMap<String, serde_json::Value>,
}

/// One declared field.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSchema {
	/// Field name.
	pub name: String,
	/// Kind expression.
	pub kind: String,
	/// Whether the field may be absent or null.
	#[serde(default)]
	pub optional: bool,
}

impl Schema {
	/// Parse a JSON schema document.
	pub fn from_json(bytes: &[u8]) -> codec::Result<Self> {
		Ok(serde_json::from_slice(bytes)?)
	}

	/// Build `'static` descriptors and register them in schema order.
	///
	/// Descriptors live for the rest of the process; load a schema once at startup.
	pub fn into_registry(self) -> Result<Registry> {
		let names: Vec<&'static str> = self.types.iter().map(|item| leak_str(&item.name)).collect();

		let mut registry = Registry::new();
		for (item, name) in self.types.iter().zip(names.iter().copied()) {
			let descriptor = item.build(name, &names)?;
			registry.register(descriptor)?;
			register_manual_literals(descriptor, item.manual_literals());
		}
		Ok(registry)
	}
}

impl TypeSchema {
	fn build(&self, name: &'static str, names: &[&'static str]) -> Result<&'static TypeDescriptor> {
		let mut fields = Vec::with_capacity(self.fields.len());
		for field in &self.fields {
			let kind = parse_kind(&field.kind, names).ok_or_else(|| BindError::InvalidKind {
				type_name: self.name.clone(),
				field: field.name.clone(),
				kind: field.kind.clone(),
			})?;
			fields.push(FieldDescriptor {
				name: leak_str(&field.name),
				kind,
				optional: field.optional,
			});
		}

		let manual: Vec<&'static str> = self.manual.keys().map(|field| leak_str(field)).collect();
		let descriptor: &'static TypeDescriptor = Box::leak(Box::new(TypeDescriptor {
			name,
			fields: Box::leak(fields.into_boxed_slice()),
			ignored: leak_names(&self.ignored),
			flexible: leak_names(&self.flexible),
			manual: Box::leak(manual.into_boxed_slice()),
			construct: Record::construct,
		}));
		Ok(descriptor)
	}

	fn manual_literals(&self) -> ValueMap {
		self.manual.iter().map(|(field, literal)| (field.as_str(), codec::json::from_json(literal.clone()))).collect()
	}
}

fn parse_kind(text: &str, names: &[&'static str]) -> Option<FieldKind> {
	let text = text.trim();
	if let Some(inner) = text.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
		let element = parse_kind(inner, names)?;
		return Some(FieldKind::List(Box::leak(Box::new(element))));
	}

	match text {
		"bool" => Some(FieldKind::Bool),
		"int" => Some(FieldKind::Int),
		"float" => Some(FieldKind::Float),
		"string" => Some(FieldKind::String),
		"map" => Some(FieldKind::Map),
		"any" => Some(FieldKind::Any),
		other => names.iter().copied().find(|name| *name == other).map(FieldKind::Object),
	}
}

fn leak_str(text: &str) -> &'static str {
	Box::leak(text.to_owned().into_boxed_str())
}

fn leak_names(names: &[String]) -> &'static [&'static str] {
	let leaked: Vec<&'static str> = names.iter().map(|name| leak_str(name)).collect();
	Box::leak(leaked.into_boxed_slice())
}
