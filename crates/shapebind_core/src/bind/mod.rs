mod access;
mod convert;
mod descriptor;
mod error;
mod matcher;
mod record;
mod registry;
mod schema;
#[cfg(test)]
pub(crate) mod test_support;
mod unbind;
mod value;

/// Typed field access for constructors.
pub use access::FieldReader;
/// Tree to object conversion entry point.
pub use convert::bind;
/// Static type declarations and the domain object trait.
pub use descriptor::{Bindable, ConstructFn, FieldDescriptor, FieldKind, TypeDescriptor};
/// Error and result aliases.
pub use error::{BindError, Result};
/// Structural candidate selection and diagnostics.
pub use matcher::{CandidateVerdict, Explanation, Match, explain, select};
/// Schema-driven generic domain object.
pub use record::Record;
/// Ordered candidate collection.
pub use registry::Registry;
/// Runtime schema files.
pub use schema::{FieldSchema, Schema, TypeSchema};
/// Object to tree conversion entry points.
pub use unbind::{ToValue, unbind, unbind_all, unbind_value};
/// Runtime value types.
pub use value::{BoundObject, Opaque, Value, ValueKind, ValueMap};
