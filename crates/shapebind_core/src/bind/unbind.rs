use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use crate::bind::{BindError, Bindable, BoundObject, Result, Value, ValueMap};

/// Runtime field value that can be written into a tree.
pub trait ToValue {
	/// Convert to a tree value.
	fn to_value(&self) -> Result<Value>;

	/// Whether a field holding this value is left out of the unbound map.
	fn is_absent(&self) -> bool {
		false
	}
}

/// Convert a domain object into a map of its declared fields.
///
/// Ignored fields are skipped, manual fields take the instance-supplied literal, absent
/// optionals are omitted. Nested objects, collections, and maps recurse. Any value without a
/// tree representation fails the whole conversion.
pub fn unbind(object: &dyn Bindable) -> Result<Value> {
	let descriptor = object.descriptor();
	let mut out = ValueMap::new();

	for field in descriptor.fields {
		if descriptor.is_ignored(field.name) {
			continue;
		}

		if descriptor.is_manual(field.name) {
			if let Some(value) = object.manual_value(field.name) {
				out.insert(field.name, value);
				continue;
			}
		}

		let runtime = object.field(field.name).ok_or_else(|| BindError::MissingField {
			type_name: descriptor.name.to_owned(),
			field: field.name.to_owned(),
		})?;
		if runtime.is_absent() {
			continue;
		}

		let value = runtime.to_value().map_err(|err| locate(err, descriptor.name, field.name))?;
		out.insert(field.name, value);
	}

	Ok(Value::Map(out))
}

/// Convert a slice of domain objects into a list of maps.
pub fn unbind_all<T: Bindable>(objects: &[T]) -> Result<Value> {
	let items = objects.iter().map(|object| unbind(object)).collect::<Result<Vec<_>>>()?;
	Ok(Value::Array(items))
}

/// Replace every bound object inside `value` with its unbound map.
pub fn unbind_value(value: &Value) -> Result<Value> {
	match value {
		Value::Array(items) => Ok(Value::Array(items.iter().map(unbind_value).collect::<Result<Vec<_>>>()?)),
		Value::Map(map) => unbind_map(map).map(Value::Map),
		Value::Object(object) => unbind(object.get()),
		Value::Opaque(opaque) => Err(bare_unserializable(format!("opaque {}", opaque.type_name()))),
		scalar => Ok(scalar.clone()),
	}
}

fn unbind_map(map: &ValueMap) -> Result<ValueMap> {
	map.iter()
		.map(|(key, value)| unbind_value(value).map(|value| (key.clone(), value)))
		.collect()
}

const BARE: &str = "value";

fn bare_unserializable(reason: String) -> BindError {
	BindError::Unserializable {
		at: BARE.to_owned(),
		reason,
	}
}

/// Attach the field location to errors raised by field values.
fn locate(err: BindError, type_name: &str, field: &str) -> BindError {
	match err {
		BindError::Unserializable { at, reason } if at == BARE => BindError::unserializable(type_name, field, reason),
		other => other,
	}
}

impl ToValue for Value {
	fn to_value(&self) -> Result<Value> {
		unbind_value(self)
	}
}

impl ToValue for ValueMap {
	fn to_value(&self) -> Result<Value> {
		unbind_map(self).map(Value::Map)
	}
}

impl ToValue for BoundObject {
	fn to_value(&self) -> Result<Value> {
		unbind(self.get())
	}
}

impl ToValue for bool {
	fn to_value(&self) -> Result<Value> {
		Ok(Value::Bool(*self))
	}
}

macro_rules! lossless_int {
	($($ty:ty),*) => {
		$(impl ToValue for $ty {
			fn to_value(&self) -> Result<Value> {
				Ok(Value::I64(i64::from(*self)))
			}
		})*
	};
}

lossless_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! ranged_int {
	($($ty:ty),*) => {
		$(impl ToValue for $ty {
			fn to_value(&self) -> Result<Value> {
				i64::try_from(*self)
					.map(Value::I64)
					.map_err(|_| bare_unserializable(format!("integer {} is outside the i64 range", self)))
			}
		})*
	};
}

ranged_int!(u64, usize, isize, i128, u128);

impl ToValue for f32 {
	fn to_value(&self) -> Result<Value> {
		Ok(Value::F64(f64::from(*self)))
	}
}

impl ToValue for f64 {
	fn to_value(&self) -> Result<Value> {
		Ok(Value::F64(*self))
	}
}

impl ToValue for str {
	fn to_value(&self) -> Result<Value> {
		Ok(Value::String(self.into()))
	}
}

impl ToValue for String {
	fn to_value(&self) -> Result<Value> {
		Ok(Value::String(self.as_str().into()))
	}
}

impl ToValue for char {
	fn to_value(&self) -> Result<Value> {
		Ok(Value::String(self.to_string().into_boxed_str()))
	}
}

impl<T: ToValue> ToValue for Option<T> {
	fn to_value(&self) -> Result<Value> {
		match self {
			Some(value) => value.to_value(),
			None => Ok(Value::Null),
		}
	}

	fn is_absent(&self) -> bool {
		self.is_none()
	}
}

impl<T: ToValue + ?Sized> ToValue for &T {
	fn to_value(&self) -> Result<Value> {
		(**self).to_value()
	}

	fn is_absent(&self) -> bool {
		(**self).is_absent()
	}
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
	fn to_value(&self) -> Result<Value> {
		(**self).to_value()
	}

	fn is_absent(&self) -> bool {
		(**self).is_absent()
	}
}

impl<T: ToValue + ?Sized> ToValue for Arc<T> {
	fn to_value(&self) -> Result<Value> {
		(**self).to_value()
	}

	fn is_absent(&self) -> bool {
		(**self).is_absent()
	}
}

impl<T: ToValue> ToValue for [T] {
	fn to_value(&self) -> Result<Value> {
		list(self.iter())
	}
}

impl<T: ToValue> ToValue for Vec<T> {
	fn to_value(&self) -> Result<Value> {
		list(self.iter())
	}
}

impl<T: ToValue> ToValue for BTreeSet<T> {
	fn to_value(&self) -> Result<Value> {
		list(self.iter())
	}
}

impl<T: ToValue, S> ToValue for HashSet<T, S> {
	fn to_value(&self) -> Result<Value> {
		list(self.iter())
	}
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
	fn to_value(&self) -> Result<Value> {
		map(self.iter())
	}
}

impl<T: ToValue, S> ToValue for HashMap<String, T, S> {
	fn to_value(&self) -> Result<Value> {
		map(self.iter())
	}
}

fn list<'a, T: ToValue + 'a>(items: impl Iterator<Item = &'a T>) -> Result<Value> {
	let items = items.map(ToValue::to_value).collect::<Result<Vec<_>>>()?;
	Ok(Value::Array(items))
}

fn map<'a, T: ToValue + 'a>(entries: impl Iterator<Item = (&'a String, &'a T)>) -> Result<Value> {
	let mut out = ValueMap::new();
	for (key, value) in entries {
		out.insert(key.as_str(), value.to_value()?);
	}
	Ok(Value::Map(out))
}
