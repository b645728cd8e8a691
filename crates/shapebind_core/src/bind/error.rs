use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BindError>;

/// Errors produced while constructing, unbinding, or registering domain types.
///
/// A map that matches no candidate is not an error: `bind` leaves it as a plain map.
#[derive(Debug, Error)]
pub enum BindError {
	/// A selected candidate's constructor needed a field the map does not carry.
	#[error("{type_name}: missing field {field}")]
	MissingField {
		/// Type being constructed.
		type_name: String,
		/// Missing field name.
		field: String,
	},
	/// A selected candidate's constructor found a value of the wrong kind.
	#[error("{type_name}: field {field} expected {expected}, got {got}")]
	TypeMismatch {
		/// Type being constructed.
		type_name: String,
		/// Offending field name.
		field: String,
		/// Expected logical kind.
		expected: String,
		/// Actual value kind label.
		got: &'static str,
	},
	/// A runtime value has no tree representation.
	#[error("unserializable value at {at}: {reason}")]
	Unserializable {
		/// `Type.field` location, or `value` for bare trees.
		at: String,
		/// Why the value cannot be represented.
		reason: String,
	},
	/// A descriptor is internally inconsistent.
	#[error("invalid descriptor {type_name}: {reason}")]
	InvalidDescriptor {
		/// Descriptor type name.
		type_name: String,
		/// Validation failure detail.
		reason: String,
	},
	/// Two descriptors in one registry share a type name.
	#[error("duplicate type name {type_name}")]
	DuplicateType {
		/// Repeated type name.
		type_name: String,
	},
	/// A schema field kind could not be parsed.
	#[error("invalid field kind {kind:?} on {type_name}.{field}")]
	InvalidKind {
		/// Declaring type name.
		type_name: String,
		/// Field name.
		field: String,
		/// Raw kind text.
		kind: String,
	},
}

impl BindError {
	pub(crate) fn unserializable(type_name: &str, field: &str, reason: impl Into<String>) -> Self {
		Self::Unserializable {
			at: format!("{type_name}.{field}"),
			reason: reason.into(),
		}
	}
}
