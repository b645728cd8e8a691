use tracing::trace;

use crate::bind::{FieldDescriptor, FieldKind, TypeDescriptor, Value, ValueKind, ValueMap};

/// Candidate chosen for a map node.
#[derive(Debug, Clone, Copy)]
pub struct Match {
	/// Selected descriptor.
	pub descriptor: &'static TypeDescriptor,
	/// Map keys the descriptor does not declare.
	pub extra_keys: usize,
}

/// Outcome of evaluating one candidate against a map node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateVerdict {
	/// The map lacks fields the candidate requires.
	Missing {
		/// Required field names absent from the map.
		fields: Vec<&'static str>,
	},
	/// The candidate cannot beat the best candidate seen so far.
	Pruned {
		/// Map keys the candidate does not declare.
		extra_keys: usize,
	},
	/// A present field has a value of an incompatible kind.
	Incompatible {
		/// Offending field name.
		field: &'static str,
		/// Declared kind.
		expected: FieldKind,
		/// Kind found in the map.
		got: ValueKind,
	},
	/// The candidate fits and improved on every earlier candidate.
	Accepted {
		/// Map keys the candidate does not declare.
		extra_keys: usize,
	},
	/// Scanning stopped at an exact match before this candidate.
	NotReached,
}

impl CandidateVerdict {
	/// Render verdict as a stable lowercase label.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Missing { .. } => "missing",
			Self::Pruned { .. } => "pruned",
			Self::Incompatible { .. } => "incompatible",
			Self::Accepted { .. } => "accepted",
			Self::NotReached => "not_reached",
		}
	}
}

/// Per-candidate verdicts for one map node, plus the selection they lead to.
#[derive(Debug, Clone)]
pub struct Explanation {
	/// Verdicts in candidate order.
	pub verdicts: Vec<(&'static TypeDescriptor, CandidateVerdict)>,
	/// Candidate `select` returns for the same input.
	pub selected: Option<Match>,
}

/// Pick the candidate that best explains the keys of `data`.
///
/// A candidate is eligible when `data` carries all of its required fields and every declared
/// field present in `data` holds a compatible value. Among eligible candidates the one with
/// the fewest undeclared keys wins; ties go to the earlier candidate, and a candidate with no
/// undeclared keys ends the scan immediately.
pub fn select(data: &ValueMap, candidates: &[&'static TypeDescriptor]) -> Option<Match> {
	let mut best: Option<Match> = None;

	for &candidate in candidates {
		let bound = best.map_or(usize::MAX, |item| item.extra_keys);
		let verdict = evaluate(data, candidate, bound);
		trace!(candidate = candidate.name, ?verdict, "evaluated candidate");

		if let CandidateVerdict::Accepted { extra_keys } = verdict {
			best = Some(Match {
				descriptor: candidate,
				extra_keys,
			});
			if extra_keys == 0 {
				break;
			}
		}
	}

	best
}

/// Evaluate every candidate the way [`select`] does and report each verdict.
pub fn explain(data: &ValueMap, candidates: &[&'static TypeDescriptor]) -> Explanation {
	let mut verdicts = Vec::with_capacity(candidates.len());
	let mut selected: Option<Match> = None;

	for &candidate in candidates {
		if selected.is_some_and(|item| item.extra_keys == 0) {
			verdicts.push((candidate, CandidateVerdict::NotReached));
			continue;
		}

		let bound = selected.map_or(usize::MAX, |item| item.extra_keys);
		let verdict = evaluate(data, candidate, bound);
		if let CandidateVerdict::Accepted { extra_keys } = verdict {
			selected = Some(Match {
				descriptor: candidate,
				extra_keys,
			});
		}
		verdicts.push((candidate, verdict));
	}

	Explanation { verdicts, selected }
}

/// Whether `value` may be stored in `field` during matching.
pub(crate) fn field_accepts(field: &FieldDescriptor, value: &Value) -> bool {
	(field.optional && value.is_null()) || kind_accepts(&field.kind, value)
}

fn evaluate(data: &ValueMap, candidate: &'static TypeDescriptor, bound: usize) -> CandidateVerdict {
	let missing: Vec<&'static str> = candidate
		.required_fields()
		.filter(|field| !data.contains_key(field.name))
		.map(|field| field.name)
		.collect();
	if !missing.is_empty() {
		return CandidateVerdict::Missing { fields: missing };
	}

	let extra_keys = data.keys().filter(|key| !candidate.declares(key)).count();
	if extra_keys >= bound {
		return CandidateVerdict::Pruned { extra_keys };
	}

	for field in candidate.declared_fields() {
		let Some(value) = data.get(field.name) else {
			continue;
		};
		if candidate.is_flexible(field.name) {
			continue;
		}
		if !field_accepts(field, value) {
			return CandidateVerdict::Incompatible {
				field: field.name,
				expected: field.kind,
				got: value.kind(),
			};
		}
	}

	CandidateVerdict::Accepted { extra_keys }
}

fn kind_accepts(kind: &FieldKind, value: &Value) -> bool {
	match (kind, value) {
		(FieldKind::Any, _) => true,
		(FieldKind::Bool, Value::Bool(_)) => true,
		(FieldKind::Int, Value::I64(_)) => true,
		// Codecs decode integral number literals as integers.
		(FieldKind::Float, Value::F64(_) | Value::I64(_)) => true,
		(FieldKind::String, Value::String(_)) => true,
		(FieldKind::Map, Value::Map(_)) => true,
		(FieldKind::Object(name), Value::Object(object)) => object.type_name() == *name,
		(FieldKind::List(element), Value::Array(items)) => items.iter().all(|item| kind_accepts(element, item)),
		_ => false,
	}
}
