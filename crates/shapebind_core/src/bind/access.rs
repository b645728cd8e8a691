use crate::bind::{BindError, Bindable, Result, TypeDescriptor, Value, ValueMap};

/// Typed field access used by constructors.
///
/// Every failure names the type being constructed, so a constructor can simply `?` its way
/// through the fields it needs.
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
	type_name: &'a str,
	map: &'a ValueMap,
}

impl ValueMap {
	/// Read fields of `descriptor` from this map.
	pub fn reader<'a>(&'a self, descriptor: &'a TypeDescriptor) -> FieldReader<'a> {
		FieldReader {
			type_name: descriptor.name,
			map: self,
		}
	}
}

impl<'a> FieldReader<'a> {
	/// Underlying map.
	pub fn map(&self) -> &'a ValueMap {
		self.map
	}

	/// Raw value of a field that must be present.
	pub fn value(&self, field: &str) -> Result<&'a Value> {
		self.map.get(field).ok_or_else(|| BindError::MissingField {
			type_name: self.type_name.to_owned(),
			field: field.to_owned(),
		})
	}

	/// Raw value of a field that may be absent; null reads as absent.
	pub fn optional_value(&self, field: &str) -> Option<&'a Value> {
		self.map.get(field).filter(|value| !value.is_null())
	}

	/// Build a [`BindError::TypeMismatch`] for `field`.
	pub fn mismatch(&self, field: &str, expected: impl Into<String>, got: &Value) -> BindError {
		BindError::TypeMismatch {
			type_name: self.type_name.to_owned(),
			field: field.to_owned(),
			expected: expected.into(),
			got: got.kind().as_str(),
		}
	}

	/// Boolean field.
	pub fn require_bool(&self, field: &str) -> Result<bool> {
		let value = self.value(field)?;
		value.as_bool().ok_or_else(|| self.mismatch(field, "bool", value))
	}

	/// Integer field.
	pub fn require_i64(&self, field: &str) -> Result<i64> {
		let value = self.value(field)?;
		value.as_i64().ok_or_else(|| self.mismatch(field, "int", value))
	}

	/// Float field; integer values widen.
	pub fn require_f64(&self, field: &str) -> Result<f64> {
		let value = self.value(field)?;
		value.as_f64().ok_or_else(|| self.mismatch(field, "float", value))
	}

	/// String field.
	pub fn require_str(&self, field: &str) -> Result<&'a str> {
		let value = self.value(field)?;
		value.as_str().ok_or_else(|| self.mismatch(field, "string", value))
	}

	/// Plain map field.
	pub fn require_map(&self, field: &str) -> Result<&'a ValueMap> {
		let value = self.value(field)?;
		value.as_map().ok_or_else(|| self.mismatch(field, "map", value))
	}

	/// Nested domain object field, cloned out of its handle.
	pub fn require_object<T: Bindable + Clone>(&self, field: &str) -> Result<T> {
		let value = self.value(field)?;
		self.object_from(field, value)
	}

	/// List field, items unconverted.
	pub fn require_list(&self, field: &str) -> Result<&'a [Value]> {
		let value = self.value(field)?;
		value.as_array().ok_or_else(|| self.mismatch(field, "array", value))
	}

	/// List field converted item by item.
	pub fn require_list_with<T>(&self, field: &str, expected: &str, convert: impl Fn(&'a Value) -> Option<T>) -> Result<Vec<T>> {
		let items = self.require_list(field)?;
		items
			.iter()
			.map(|item| convert(item).ok_or_else(|| self.mismatch(field, format!("[{expected}]"), item)))
			.collect()
	}

	/// List of integers.
	pub fn require_i64s(&self, field: &str) -> Result<Vec<i64>> {
		self.require_list_with(field, "int", Value::as_i64)
	}

	/// List of floats; integer items widen.
	pub fn require_f64s(&self, field: &str) -> Result<Vec<f64>> {
		self.require_list_with(field, "float", Value::as_f64)
	}

	/// List of strings.
	pub fn require_strings(&self, field: &str) -> Result<Vec<String>> {
		self.require_list_with(field, "string", |item| item.as_str().map(str::to_owned))
	}

	/// List of nested domain objects.
	pub fn require_objects<T: Bindable + Clone>(&self, field: &str) -> Result<Vec<T>> {
		let items = self.require_list(field)?;
		items.iter().map(|item| self.object_from(field, item)).collect()
	}

	/// Optional boolean field.
	pub fn optional_bool(&self, field: &str) -> Result<Option<bool>> {
		self.optional(field, "bool", Value::as_bool)
	}

	/// Optional integer field.
	pub fn optional_i64(&self, field: &str) -> Result<Option<i64>> {
		self.optional(field, "int", Value::as_i64)
	}

	/// Optional float field; integer values widen.
	pub fn optional_f64(&self, field: &str) -> Result<Option<f64>> {
		self.optional(field, "float", Value::as_f64)
	}

	/// Optional string field.
	pub fn optional_str(&self, field: &str) -> Result<Option<&'a str>> {
		self.optional(field, "string", Value::as_str)
	}

	/// Optional nested domain object field.
	pub fn optional_object<T: Bindable + Clone>(&self, field: &str) -> Result<Option<T>> {
		self.optional_value(field).map(|value| self.object_from(field, value)).transpose()
	}

	/// Optional plain map field.
	pub fn optional_map(&self, field: &str) -> Result<Option<&'a ValueMap>> {
		self.optional(field, "map", Value::as_map)
	}

	/// Optional list field, items unconverted.
	pub fn optional_list(&self, field: &str) -> Result<Option<&'a [Value]>> {
		self.optional(field, "array", Value::as_array)
	}

	/// Optional list of integers.
	pub fn optional_i64s(&self, field: &str) -> Result<Option<Vec<i64>>> {
		self.optional_list_with(field, "int", Value::as_i64)
	}

	/// Optional list of floats; integer items widen.
	pub fn optional_f64s(&self, field: &str) -> Result<Option<Vec<f64>>> {
		self.optional_list_with(field, "float", Value::as_f64)
	}

	/// Optional list of strings.
	pub fn optional_strings(&self, field: &str) -> Result<Option<Vec<String>>> {
		self.optional_list_with(field, "string", |item| item.as_str().map(str::to_owned))
	}

	/// Optional list of nested domain objects.
	pub fn optional_objects<T: Bindable + Clone>(&self, field: &str) -> Result<Option<Vec<T>>> {
		if self.optional_value(field).is_none() {
			return Ok(None);
		}
		self.require_objects(field).map(Some)
	}

	fn optional_list_with<T>(&self, field: &str, expected: &str, convert: impl Fn(&'a Value) -> Option<T>) -> Result<Option<Vec<T>>> {
		if self.optional_value(field).is_none() {
			return Ok(None);
		}
		self.require_list_with(field, expected, convert).map(Some)
	}

	fn optional<T>(&self, field: &str, expected: &str, convert: impl Fn(&'a Value) -> Option<T>) -> Result<Option<T>> {
		let Some(value) = self.optional_value(field) else {
			return Ok(None);
		};
		convert(value).map(Some).ok_or_else(|| self.mismatch(field, expected, value))
	}

	fn object_from<T: Bindable + Clone>(&self, field: &str, value: &Value) -> Result<T> {
		value
			.downcast_ref::<T>()
			.cloned()
			.ok_or_else(|| self.mismatch(field, std::any::type_name::<T>(), value))
	}
}
