use serde_json::{Map, Number, Value as JsonValue, json};
use shapebind::bind::{Record, Value, unbind};

/// Render a tree as JSON, keeping bound objects visible.
///
/// Objects become `{"type": name, "fields": {...}}`; opaque handles become a
/// `<opaque T>` string and non-finite floats become `null`.
pub fn value_to_json(value: &Value) -> JsonValue {
	match value {
		Value::Null => JsonValue::Null,
		Value::Bool(v) => JsonValue::Bool(*v),
		Value::I64(v) => JsonValue::from(*v),
		Value::F64(v) => Number::from_f64(*v).map_or(JsonValue::Null, JsonValue::Number),
		Value::String(v) => JsonValue::String(v.to_string()),
		Value::Array(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
		Value::Map(map) => JsonValue::Object(map.iter().map(|(key, value)| (key.clone(), value_to_json(value))).collect()),
		Value::Object(object) => {
			let fields: Map<String, JsonValue> = match object.downcast_ref::<Record>() {
				Some(record) => record.values().iter().map(|(key, value)| (key.clone(), value_to_json(value))).collect(),
				None => match unbind(object.get()) {
					Ok(Value::Map(map)) => map.iter().map(|(key, value)| (key.clone(), value_to_json(value))).collect(),
					_ => Map::new(),
				},
			};
			json!({ "type": object.type_name(), "fields": fields })
		}
		Value::Opaque(opaque) => JsonValue::String(format!("<opaque {}>", opaque.type_name())),
	}
}
