use crate::bind::{BindError, Result, TypeDescriptor, Value, bind};
use crate::codec;

/// Ordered set of candidate descriptors.
///
/// Registration order is the matcher's tie-break: when two descriptors explain a map equally
/// well, the one registered first wins.
#[derive(Debug, Clone, Default)]
pub struct Registry {
	types: Vec<&'static TypeDescriptor>,
}

impl Registry {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Validate and append a descriptor.
	pub fn register(&mut self, descriptor: &'static TypeDescriptor) -> Result<&mut Self> {
		descriptor.validate()?;
		if self.get(descriptor.name).is_some() {
			return Err(BindError::DuplicateType {
				type_name: descriptor.name.to_owned(),
			});
		}

		self.types.push(descriptor);
		Ok(self)
	}

	/// Builder form of [`Registry::register`].
	pub fn with(mut self, descriptor: &'static TypeDescriptor) -> Result<Self> {
		self.register(descriptor)?;
		Ok(self)
	}

	/// Candidates in registration order.
	pub fn candidates(&self) -> &[&'static TypeDescriptor] {
		&self.types
	}

	/// Look up a descriptor by type name.
	pub fn get(&self, name: &str) -> Option<&'static TypeDescriptor> {
		self.types.iter().copied().find(|item| item.name == name)
	}

	/// Number of registered descriptors.
	pub fn len(&self) -> usize {
		self.types.len()
	}

	/// Whether no descriptor is registered.
	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	/// Bind a tree against the registered candidates.
	pub fn bind(&self, value: Value) -> Result<Value> {
		bind(value, &self.types)
	}

	/// Decode a JSON document and bind it against the registered candidates.
	pub fn decode(&self, bytes: &[u8]) -> codec::Result<Value> {
		let tree = codec::json::decode(bytes)?;
		Ok(self.bind(tree)?)
	}
}
