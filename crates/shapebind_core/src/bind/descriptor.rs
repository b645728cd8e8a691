use std::any::Any;
use std::collections::HashSet;
use std::fmt;

use crate::bind::{BindError, BoundObject, Record, Result, ToValue, Value, ValueMap};

/// Constructor invoked once a descriptor has been selected for a map node.
///
/// Receives the selected descriptor and the map with every nested value already bound.
pub type ConstructFn = fn(&'static TypeDescriptor, &ValueMap) -> Result<BoundObject>;

/// Expected value kind of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// Boolean scalar.
	Bool,
	/// Integer scalar.
	Int,
	/// Float scalar; integer values are accepted.
	Float,
	/// String scalar.
	String,
	/// Plain nested map.
	///
	/// Binding runs bottom-up, so a nested map that itself matches a candidate has already
	/// become an object when its parent is checked, and no longer satisfies this kind. Declare
	/// such fields as [`FieldKind::Object`] or [`FieldKind::Any`], or mark them flexible.
	Map,
	/// Any value, unchecked.
	Any,
	/// Nested domain object of the named type.
	Object(&'static str),
	/// Homogeneous list of the element kind.
	List(&'static FieldKind),
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool => f.write_str("bool"),
			Self::Int => f.write_str("int"),
			Self::Float => f.write_str("float"),
			Self::String => f.write_str("string"),
			Self::Map => f.write_str("map"),
			Self::Any => f.write_str("any"),
			Self::Object(name) => f.write_str(name),
			Self::List(element) => write!(f, "[{element}]"),
		}
	}
}

/// One declared field of a domain type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
	/// Field name as it appears in map keys.
	pub name: &'static str,
	/// Expected value kind.
	pub kind: FieldKind,
	/// Whether the field may be absent or null.
	pub optional: bool,
}

impl FieldDescriptor {
	/// Declare a field that must be present.
	pub const fn required(name: &'static str, kind: FieldKind) -> Self {
		Self { name, kind, optional: false }
	}

	/// Declare a field that may be absent or null.
	pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
		Self { name, kind, optional: true }
	}
}

/// Static shape declaration of one domain type.
///
/// Descriptors are read-only configuration: declare them as `static` items (or build them
/// once at startup) and share them across any number of conversions.
#[derive(Debug)]
pub struct TypeDescriptor {
	/// Type name, unique within a registry.
	pub name: &'static str,
	/// Declared fields in serialization order.
	pub fields: &'static [FieldDescriptor],
	/// Fields excluded from matching and serialization.
	pub ignored: &'static [&'static str],
	/// Fields exempt from the kind compatibility check.
	pub flexible: &'static [&'static str],
	/// Fields serialized from [`Bindable::manual_value`].
	pub manual: &'static [&'static str],
	/// Instantiation hook.
	pub construct: ConstructFn,
}

impl TypeDescriptor {
	/// Declare a type bound through the generic [`Record`] object.
	pub const fn record(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
		Self {
			name,
			fields,
			ignored: &[],
			flexible: &[],
			manual: &[],
			construct: Record::construct,
		}
	}

	/// Look up a declared field by name.
	pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
		self.fields.iter().find(|field| field.name == name)
	}

	/// Whether `name` is listed as ignored.
	pub fn is_ignored(&self, name: &str) -> bool {
		self.ignored.contains(&name)
	}

	/// Whether `name` is listed as flexible.
	pub fn is_flexible(&self, name: &str) -> bool {
		self.flexible.contains(&name)
	}

	/// Whether `name` is listed as manual.
	pub fn is_manual(&self, name: &str) -> bool {
		self.manual.contains(&name)
	}

	/// Whether `name` is a declared, non-ignored field.
	pub fn declares(&self, name: &str) -> bool {
		!self.is_ignored(name) && self.field(name).is_some()
	}

	/// Declared fields that take part in matching.
	pub fn declared_fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> + '_ {
		self.fields.iter().filter(|field| !self.is_ignored(field.name))
	}

	/// Declared fields a map must carry for this type to be selected.
	pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> + '_ {
		self.declared_fields().filter(|field| !field.optional)
	}

	/// Check internal consistency of the declaration.
	pub fn validate(&self) -> Result<()> {
		if self.name.is_empty() {
			return Err(self.invalid("type name is empty"));
		}

		let mut seen = HashSet::with_capacity(self.fields.len());
		for field in self.fields {
			if field.name.is_empty() {
				return Err(self.invalid("field name is empty"));
			}
			if !seen.insert(field.name) {
				return Err(self.invalid(format!("field {} declared twice", field.name)));
			}
		}

		for (list, names) in [("ignored", self.ignored), ("flexible", self.flexible), ("manual", self.manual)] {
			for name in names {
				if !seen.contains(name) {
					return Err(self.invalid(format!("{list} entry {name} is not a declared field")));
				}
			}
		}

		if let Some(name) = self.manual.iter().find(|name| self.is_ignored(name)) {
			return Err(self.invalid(format!("field {name} is both manual and ignored")));
		}

		Ok(())
	}

	fn invalid(&self, reason: impl Into<String>) -> BindError {
		BindError::InvalidDescriptor {
			type_name: self.name.to_owned(),
			reason: reason.into(),
		}
	}
}

/// Domain object that can be produced by `bind` and consumed by `unbind`.
pub trait Bindable: Any + fmt::Debug + Send + Sync {
	/// Shape declaration for this object's type.
	fn descriptor(&self) -> &'static TypeDescriptor;

	/// Runtime value of a declared field.
	///
	/// Returning `None` for a declared, non-ignored field is a contract violation and makes
	/// `unbind` fail with [`BindError::MissingField`].
	fn field(&self, name: &str) -> Option<&dyn ToValue>;

	/// Literal tree value for a field listed in [`TypeDescriptor::manual`].
	///
	/// `None` falls back to [`Bindable::field`].
	fn manual_value(&self, _name: &str) -> Option<Value> {
		None
	}

	/// Upcast for downcasting through [`BoundObject`].
	fn as_any(&self) -> &dyn Any;
}
