//! Domain types shared by the unit tests of this module.

use std::any::Any;

use crate::bind::{Bindable, BoundObject, FieldDescriptor, FieldKind, Result, ToValue, TypeDescriptor, Value, ValueMap, unbind};

/// Build a map value from literal entries.
pub(crate) fn map<const N: usize>(entries: [(&str, Value); N]) -> Value {
	Value::Map(entries.into_iter().collect())
}

pub(crate) static TYPE_A: TypeDescriptor = TypeDescriptor::record(
	"TypeA",
	&[
		FieldDescriptor::required("x", FieldKind::Int),
		FieldDescriptor::required("y", FieldKind::Int),
		FieldDescriptor::required("z", FieldKind::Int),
	],
);

pub(crate) static TYPE_B: TypeDescriptor = TypeDescriptor::record(
	"TypeB",
	&[FieldDescriptor::required("x", FieldKind::Int), FieldDescriptor::required("y", FieldKind::Int)],
);

pub(crate) static TYPE_C: TypeDescriptor = TypeDescriptor::record(
	"TypeC",
	&[FieldDescriptor::required("x", FieldKind::Int), FieldDescriptor::required("w", FieldKind::Int)],
);

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Sample {
	pub label: String,
	pub flagged: bool,
	pub weight: f64,
}

pub(crate) static SAMPLE: TypeDescriptor = TypeDescriptor {
	name: "Sample",
	fields: &[
		FieldDescriptor::required("label", FieldKind::String),
		FieldDescriptor::required("flagged", FieldKind::Bool),
		FieldDescriptor::required("weight", FieldKind::Float),
	],
	ignored: &[],
	flexible: &[],
	manual: &[],
	construct: construct_sample,
};

fn construct_sample(descriptor: &'static TypeDescriptor, map: &ValueMap) -> Result<BoundObject> {
	let fields = map.reader(descriptor);
	Ok(BoundObject::new(Sample {
		label: fields.require_str("label")?.to_owned(),
		flagged: fields.require_bool("flagged")?,
		weight: fields.require_f64("weight")?,
	}))
}

impl Bindable for Sample {
	fn descriptor(&self) -> &'static TypeDescriptor {
		&SAMPLE
	}

	fn field(&self, name: &str) -> Option<&dyn ToValue> {
		let value: &dyn ToValue = match name {
			"label" => &self.label,
			"flagged" => &self.flagged,
			"weight" => &self.weight,
			_ => return None,
		};
		Some(value)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

impl ToValue for Sample {
	fn to_value(&self) -> Result<Value> {
		unbind(self)
	}
}

pub(crate) const DEFAULT_NOTE: &str = "not serialized";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Survey {
	pub title: Option<String>,
	pub count: i64,
	pub ratio: f64,
	pub sample: Sample,
	pub readings: Vec<i64>,
	pub samples: Vec<Sample>,
	pub note: String,
}

pub(crate) static SURVEY: TypeDescriptor = TypeDescriptor {
	name: "Survey",
	fields: &[
		FieldDescriptor::optional("title", FieldKind::String),
		FieldDescriptor::required("count", FieldKind::Int),
		FieldDescriptor::required("ratio", FieldKind::Float),
		FieldDescriptor::required("sample", FieldKind::Object("Sample")),
		FieldDescriptor::required("readings", FieldKind::List(&FieldKind::Int)),
		FieldDescriptor::required("samples", FieldKind::List(&FieldKind::Object("Sample"))),
		FieldDescriptor::required("note", FieldKind::String),
	],
	ignored: &["note"],
	flexible: &[],
	manual: &[],
	construct: construct_survey,
};

fn construct_survey(descriptor: &'static TypeDescriptor, map: &ValueMap) -> Result<BoundObject> {
	let fields = map.reader(descriptor);
	Ok(BoundObject::new(Survey {
		title: fields.optional_str("title")?.map(str::to_owned),
		count: fields.require_i64("count")?,
		ratio: fields.require_f64("ratio")?,
		sample: fields.require_object("sample")?,
		readings: fields.require_i64s("readings")?,
		samples: fields.require_objects("samples")?,
		note: DEFAULT_NOTE.to_owned(),
	}))
}

impl Bindable for Survey {
	fn descriptor(&self) -> &'static TypeDescriptor {
		&SURVEY
	}

	fn field(&self, name: &str) -> Option<&dyn ToValue> {
		let value: &dyn ToValue = match name {
			"title" => &self.title,
			"count" => &self.count,
			"ratio" => &self.ratio,
			"sample" => &self.sample,
			"readings" => &self.readings,
			"samples" => &self.samples,
			"note" => &self.note,
			_ => return None,
		};
		Some(value)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

impl Survey {
	pub(crate) fn example() -> Self {
		Self {
			title: Some("field trial".to_owned()),
			count: 3,
			ratio: 0.25,
			sample: Sample {
				label: "primary".to_owned(),
				flagged: true,
				weight: 1.5,
			},
			readings: vec![4, 8, 15],
			samples: vec![
				Sample {
					label: "left".to_owned(),
					flagged: false,
					weight: 2.0,
				},
				Sample {
					label: "right".to_owned(),
					flagged: true,
					weight: 0.5,
				},
			],
			note: DEFAULT_NOTE.to_owned(),
		}
	}
}

/// Color written as a `#rrggbb` literal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Swatch {
	pub name: String,
	pub rgb: [u8; 3],
}

pub(crate) static SWATCH: TypeDescriptor = TypeDescriptor {
	name: "Swatch",
	fields: &[FieldDescriptor::required("name", FieldKind::String), FieldDescriptor::required("color", FieldKind::String)],
	ignored: &[],
	flexible: &[],
	manual: &["color"],
	construct: construct_swatch,
};

fn construct_swatch(descriptor: &'static TypeDescriptor, map: &ValueMap) -> Result<BoundObject> {
	let fields = map.reader(descriptor);
	let raw = fields.value("color")?;
	let rgb = raw.as_str().and_then(parse_hex).ok_or_else(|| fields.mismatch("color", "#rrggbb", raw))?;
	Ok(BoundObject::new(Swatch {
		name: fields.require_str("name")?.to_owned(),
		rgb,
	}))
}

fn parse_hex(text: &str) -> Option<[u8; 3]> {
	let digits = text.strip_prefix('#')?;
	if digits.len() != 6 {
		return None;
	}
	let mut rgb = [0_u8; 3];
	for (index, slot) in rgb.iter_mut().enumerate() {
		*slot = u8::from_str_radix(digits.get(index * 2..index * 2 + 2)?, 16).ok()?;
	}
	Some(rgb)
}

impl Bindable for Swatch {
	fn descriptor(&self) -> &'static TypeDescriptor {
		&SWATCH
	}

	fn field(&self, name: &str) -> Option<&dyn ToValue> {
		match name {
			"name" => Some(&self.name as &dyn ToValue),
			_ => None,
		}
	}

	fn manual_value(&self, name: &str) -> Option<Value> {
		match name {
			"color" => Some(Value::from(format!("#{:02x}{:02x}{:02x}", self.rgb[0], self.rgb[1], self.rgb[2]))),
			_ => None,
		}
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Amount that also accepts numeric strings.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Quantity {
	pub amount: i64,
	pub unit: String,
}

pub(crate) static QUANTITY: TypeDescriptor = TypeDescriptor {
	name: "Quantity",
	fields: &[FieldDescriptor::required("amount", FieldKind::Int), FieldDescriptor::required("unit", FieldKind::String)],
	ignored: &[],
	flexible: &["amount"],
	manual: &[],
	construct: construct_quantity,
};

fn construct_quantity(descriptor: &'static TypeDescriptor, map: &ValueMap) -> Result<BoundObject> {
	let fields = map.reader(descriptor);
	let raw = fields.value("amount")?;
	let amount = match raw {
		Value::I64(value) => Some(*value),
		Value::String(text) => text.trim().parse().ok(),
		_ => None,
	}
	.ok_or_else(|| fields.mismatch("amount", "int or numeric string", raw))?;
	Ok(BoundObject::new(Quantity {
		amount,
		unit: fields.require_str("unit")?.to_owned(),
	}))
}

impl Bindable for Quantity {
	fn descriptor(&self) -> &'static TypeDescriptor {
		&QUANTITY
	}

	fn field(&self, name: &str) -> Option<&dyn ToValue> {
		let value: &dyn ToValue = match name {
			"amount" => &self.amount,
			"unit" => &self.unit,
			_ => return None,
		};
		Some(value)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Counter whose total may exceed the tree integer range.
#[derive(Debug, Clone)]
pub(crate) struct Counter {
	pub total: u64,
}

pub(crate) static COUNTER: TypeDescriptor = TypeDescriptor {
	name: "Counter",
	fields: &[FieldDescriptor::required("total", FieldKind::Int)],
	ignored: &[],
	flexible: &[],
	manual: &[],
	construct: construct_counter,
};

fn construct_counter(descriptor: &'static TypeDescriptor, map: &ValueMap) -> Result<BoundObject> {
	let fields = map.reader(descriptor);
	let total = fields.require_i64("total")?;
	let total = u64::try_from(total).map_err(|_| fields.mismatch("total", "non-negative int", &Value::I64(total)))?;
	Ok(BoundObject::new(Counter { total }))
}

impl Bindable for Counter {
	fn descriptor(&self) -> &'static TypeDescriptor {
		&COUNTER
	}

	fn field(&self, name: &str) -> Option<&dyn ToValue> {
		match name {
			"total" => Some(&self.total as &dyn ToValue),
			_ => None,
		}
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
