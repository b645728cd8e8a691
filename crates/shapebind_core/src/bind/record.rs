use std::any::Any;
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::bind::{BindError, Bindable, BoundObject, Result, ToValue, TypeDescriptor, Value, ValueMap};

static ABSENT: Option<Value> = None;

/// Manual field literals of runtime descriptors, keyed by descriptor address.
static MANUAL_LITERALS: OnceLock<RwLock<HashMap<usize, &'static ValueMap>>> = OnceLock::new();

fn descriptor_key(descriptor: &'static TypeDescriptor) -> usize {
	std::ptr::from_ref(descriptor) as usize
}

/// Attach literal values for the manual fields of a leaked descriptor.
pub(crate) fn register_manual_literals(descriptor: &'static TypeDescriptor, literals: ValueMap) {
	if literals.is_empty() {
		return;
	}
	let literals: &'static ValueMap = Box::leak(Box::new(literals));
	let table = MANUAL_LITERALS.get_or_init(Default::default);
	table.write().unwrap_or_else(PoisonError::into_inner).insert(descriptor_key(descriptor), literals);
}

fn manual_literals(descriptor: &'static TypeDescriptor) -> Option<&'static ValueMap> {
	let table = MANUAL_LITERALS.get()?;
	table.read().unwrap_or_else(PoisonError::into_inner).get(&descriptor_key(descriptor)).copied()
}

/// Generic domain object for descriptors declared at runtime.
///
/// Holds the values of its declared, non-ignored fields exactly as they were bound. Manual
/// fields unbind to the literals a schema attached to the descriptor, or to their bound
/// value when none was attached.
#[derive(Debug, Clone)]
pub struct Record {
	descriptor: &'static TypeDescriptor,
	values: ValueMap,
	manual: Option<&'static ValueMap>,
}

impl Record {
	/// Constructor usable as [`TypeDescriptor::construct`].
	pub fn construct(descriptor: &'static TypeDescriptor, map: &ValueMap) -> Result<BoundObject> {
		let mut values = ValueMap::new();
		for field in descriptor.declared_fields() {
			match map.get(field.name) {
				Some(Value::Null) if field.optional => {}
				Some(value) => {
					values.insert(field.name, value.clone());
				}
				None if field.optional => {}
				None => {
					return Err(BindError::MissingField {
						type_name: descriptor.name.to_owned(),
						field: field.name.to_owned(),
					});
				}
			}
		}

		Ok(BoundObject::new(Self {
			descriptor,
			values,
			manual: manual_literals(descriptor),
		}))
	}

	/// Declared type name.
	pub fn type_name(&self) -> &'static str {
		self.descriptor.name
	}

	/// Bound value of one field.
	pub fn get(&self, field: &str) -> Option<&Value> {
		self.values.get(field)
	}

	/// All bound field values.
	pub fn values(&self) -> &ValueMap {
		&self.values
	}
}

impl Bindable for Record {
	fn descriptor(&self) -> &'static TypeDescriptor {
		self.descriptor
	}

	fn field(&self, name: &str) -> Option<&dyn ToValue> {
		if !self.descriptor.declares(name) {
			return None;
		}
		match self.values.get(name) {
			Some(value) => Some(value as &dyn ToValue),
			None => Some(&ABSENT as &dyn ToValue),
		}
	}

	fn manual_value(&self, name: &str) -> Option<Value> {
		self.manual?.get(name).cloned()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
