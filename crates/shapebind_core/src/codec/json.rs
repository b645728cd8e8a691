use serde_json::{Map, Number, Value as JsonValue};

use crate::bind::{Value, ValueMap, unbind};
use crate::codec::{CodecError, Result};

/// Decode a JSON document into a value tree.
///
/// Numbers that fit `i64` decode as integers, everything else as floats. The top-level entity
/// must be an object or an array.
pub fn decode(bytes: &[u8]) -> Result<Value> {
	let parsed: JsonValue = serde_json::from_slice(bytes)?;
	match parsed {
		JsonValue::Object(_) | JsonValue::Array(_) => Ok(from_json(parsed)),
		other => Err(CodecError::TopLevelScalar {
			kind: from_json(other).kind().as_str(),
		}),
	}
}

/// Encode a value tree as compact JSON.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
	let json = document_to_json(value)?;
	Ok(serde_json::to_vec(&json)?)
}

/// Encode a value tree as indented JSON.
pub fn encode_pretty(value: &Value) -> Result<Vec<u8>> {
	let json = document_to_json(value)?;
	Ok(serde_json::to_vec_pretty(&json)?)
}

/// Convert a parsed `serde_json` value into a value tree.
pub fn from_json(value: JsonValue) -> Value {
	match value {
		JsonValue::Null => Value::Null,
		JsonValue::Bool(v) => Value::Bool(v),
		JsonValue::Number(number) => match number.as_i64() {
			Some(v) => Value::I64(v),
			None => Value::F64(number.as_f64().unwrap_or(f64::NAN)),
		},
		JsonValue::String(v) => Value::String(v.into_boxed_str()),
		JsonValue::Array(items) => Value::Array(items.into_iter().map(from_json).collect()),
		JsonValue::Object(map) => Value::Map(map.into_iter().map(|(key, value)| (key, from_json(value))).collect::<ValueMap>()),
	}
}

/// Convert a value tree into a `serde_json` value, unbinding domain objects on the way.
pub fn to_json(value: &Value) -> Result<JsonValue> {
	match value {
		Value::Null => Ok(JsonValue::Null),
		Value::Bool(v) => Ok(JsonValue::Bool(*v)),
		Value::I64(v) => Ok(JsonValue::from(*v)),
		Value::F64(v) => Number::from_f64(*v).map(JsonValue::Number).ok_or(CodecError::NonFiniteFloat { value: *v }),
		Value::String(v) => Ok(JsonValue::String(v.to_string())),
		Value::Array(items) => Ok(JsonValue::Array(items.iter().map(to_json).collect::<Result<Vec<_>>>()?)),
		Value::Map(map) => map_to_json(map).map(JsonValue::Object),
		Value::Object(object) => to_json(&unbind(object.get())?),
		Value::Opaque(opaque) => Err(CodecError::Opaque {
			type_name: opaque.type_name(),
		}),
	}
}

fn map_to_json(map: &ValueMap) -> Result<Map<String, JsonValue>> {
	map.iter().map(|(key, value)| to_json(value).map(|value| (key.clone(), value))).collect()
}

fn document_to_json(value: &Value) -> Result<JsonValue> {
	match value {
		Value::Map(_) | Value::Array(_) | Value::Object(_) => to_json(value),
		other => Err(CodecError::TopLevelScalar {
			kind: other.kind().as_str(),
		}),
	}
}
