use std::any::Any;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::sync::Arc;

use crate::bind::{Bindable, TypeDescriptor, unbind};

/// Schema-less runtime value as produced by a codec or by `unbind`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null marker.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	I64(i64),
	/// 64-bit float scalar.
	F64(f64),
	/// UTF-8 string.
	String(Box<str>),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// String-keyed map.
	Map(ValueMap),
	/// Domain object instantiated by `bind`.
	Object(BoundObject),
	/// Native handle with no tree representation.
	Opaque(Opaque),
}

/// Logical kind of a [`Value`], used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	/// [`Value::Null`].
	Null,
	/// [`Value::Bool`].
	Bool,
	/// [`Value::I64`].
	I64,
	/// [`Value::F64`].
	F64,
	/// [`Value::String`].
	String,
	/// [`Value::Array`].
	Array,
	/// [`Value::Map`].
	Map,
	/// [`Value::Object`].
	Object,
	/// [`Value::Opaque`].
	Opaque,
}

impl ValueKind {
	/// Render kind as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::I64 => "int",
			Self::F64 => "float",
			Self::String => "string",
			Self::Array => "array",
			Self::Map => "map",
			Self::Object => "object",
			Self::Opaque => "opaque",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Value {
	/// Return the logical kind of this value.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Null => ValueKind::Null,
			Self::Bool(_) => ValueKind::Bool,
			Self::I64(_) => ValueKind::I64,
			Self::F64(_) => ValueKind::F64,
			Self::String(_) => ValueKind::String,
			Self::Array(_) => ValueKind::Array,
			Self::Map(_) => ValueKind::Map,
			Self::Object(_) => ValueKind::Object,
			Self::Opaque(_) => ValueKind::Opaque,
		}
	}

	/// Whether this is [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Boolean payload, if any.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Integer payload, if any.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::I64(v) => Some(*v),
			_ => None,
		}
	}

	/// Float payload; integers widen to `f64`.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::F64(v) => Some(*v),
			Self::I64(v) => Some(*v as f64),
			_ => None,
		}
	}

	/// String payload, if any.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(v) => Some(v),
			_ => None,
		}
	}

	/// Array items, if any.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Map payload, if any.
	pub fn as_map(&self) -> Option<&ValueMap> {
		match self {
			Self::Map(map) => Some(map),
			_ => None,
		}
	}

	/// Bound object payload, if any.
	pub fn as_object(&self) -> Option<&BoundObject> {
		match self {
			Self::Object(object) => Some(object),
			_ => None,
		}
	}

	/// Downcast a bound object payload to its concrete type.
	pub fn downcast_ref<T: Bindable>(&self) -> Option<&T> {
		self.as_object().and_then(BoundObject::downcast_ref)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::I64(i64::from(value))
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::I64(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::F64(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::Array(value)
	}
}

impl From<ValueMap> for Value {
	fn from(value: ValueMap) -> Self {
		Self::Map(value)
	}
}

impl From<BoundObject> for Value {
	fn from(value: BoundObject) -> Self {
		Self::Object(value)
	}
}

/// String-keyed map with unique keys.
///
/// Keys are kept sorted so encoded output is deterministic; key order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueMap {
	entries: BTreeMap<String, Value>,
}

impl ValueMap {
	/// Create an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the map has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Look up one entry.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.get(key)
	}

	/// Whether `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Insert or replace an entry, returning the previous value.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.entries.insert(key.into(), value.into())
	}

	/// Remove an entry.
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.entries.remove(key)
	}

	/// Iterate keys.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Iterate entries.
	pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
		self.entries.iter()
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ValueMap {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect(),
		}
	}
}

impl IntoIterator for ValueMap {
	type Item = (String, Value);
	type IntoIter = btree_map::IntoIter<String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<'a> IntoIterator for &'a ValueMap {
	type Item = (&'a String, &'a Value);
	type IntoIter = btree_map::Iter<'a, String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

/// Shared handle to a domain object instantiated from a map node.
#[derive(Clone)]
pub struct BoundObject(Arc<dyn Bindable>);

impl BoundObject {
	/// Wrap a domain object.
	pub fn new<T: Bindable>(object: T) -> Self {
		Self(Arc::new(object))
	}

	/// Descriptor the object was declared with.
	pub fn descriptor(&self) -> &'static TypeDescriptor {
		self.0.descriptor()
	}

	/// Declared type name.
	pub fn type_name(&self) -> &'static str {
		self.0.descriptor().name
	}

	/// Borrow the object through its trait.
	pub fn get(&self) -> &dyn Bindable {
		self.0.as_ref()
	}

	/// Downcast to a concrete domain type.
	pub fn downcast_ref<T: Bindable>(&self) -> Option<&T> {
		self.0.as_any().downcast_ref::<T>()
	}

	/// Whether the object is a `T`.
	pub fn is<T: Bindable>(&self) -> bool {
		self.downcast_ref::<T>().is_some()
	}
}

impl fmt::Debug for BoundObject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.0.as_ref(), f)
	}
}

/// Objects compare equal when they share a type and unbind to equal trees.
impl PartialEq for BoundObject {
	fn eq(&self, other: &Self) -> bool {
		if Arc::ptr_eq(&self.0, &other.0) {
			return true;
		}
		if self.type_name() != other.type_name() {
			return false;
		}
		match (unbind(self.get()), unbind(other.get())) {
			(Ok(left), Ok(right)) => left == right,
			_ => false,
		}
	}
}

/// Native value carried through a tree untouched.
#[derive(Clone)]
pub struct Opaque {
	type_name: &'static str,
	handle: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
	/// Wrap a native value.
	pub fn new<T: Any + Send + Sync>(handle: T) -> Self {
		Self {
			type_name: std::any::type_name::<T>(),
			handle: Arc::new(handle),
		}
	}

	/// Rust type name of the wrapped value.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Downcast to the wrapped type.
	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.handle.downcast_ref::<T>()
	}
}

impl fmt::Debug for Opaque {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Opaque({})", self.type_name)
	}
}

/// Opaque handles compare by identity.
impl PartialEq for Opaque {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.handle, &other.handle)
	}
}
