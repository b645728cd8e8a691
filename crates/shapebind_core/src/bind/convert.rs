use tracing::debug;

use crate::bind::{Result, TypeDescriptor, Value, ValueMap, select};

/// Convert every map node of `value` that structurally matches a candidate into a domain object.
///
/// Arrays convert element by element. Maps convert their values first, then the converted map
/// is matched against `candidates`; a map with no match stays a plain map. Scalars, bound
/// objects, and opaque values pass through unchanged.
///
/// Fails only when a selected candidate's constructor rejects the map.
pub fn bind(value: Value, candidates: &[&'static TypeDescriptor]) -> Result<Value> {
	match value {
		Value::Array(items) => {
			let items = items.into_iter().map(|item| bind(item, candidates)).collect::<Result<Vec<_>>>()?;
			Ok(Value::Array(items))
		}
		Value::Map(map) => bind_map(map, candidates),
		other => Ok(other),
	}
}

fn bind_map(map: ValueMap, candidates: &[&'static TypeDescriptor]) -> Result<Value> {
	let converted = map
		.into_iter()
		.map(|(key, value)| bind(value, candidates).map(|value| (key, value)))
		.collect::<Result<ValueMap>>()?;

	let Some(found) = select(&converted, candidates) else {
		return Ok(Value::Map(converted));
	};

	let descriptor = found.descriptor;
	match (descriptor.construct)(descriptor, &converted) {
		Ok(object) => {
			debug!(type_name = descriptor.name, extra_keys = found.extra_keys, "bound map node");
			Ok(Value::Object(object))
		}
		Err(err) => {
			debug!(type_name = descriptor.name, error = %err, "selected candidate failed to construct");
			Err(err)
		}
	}
}
