use super::VariableMatrixWidth;
use crate::{
	error::{FieldErrorKind, ModelError},
	json::{JsonArray, JsonValue},
};
use anyhow::{Context, Result};

/// The `variableMatrixWidths` array of a tile matrix, in document order.
///
/// Rows that no entry covers keep the regular matrix width (a coalescing factor of 1).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableMatrixWidths(pub Vec<VariableMatrixWidth>);

impl VariableMatrixWidths {
	/// Parses an array of entry objects.
	///
	/// # Errors
	///
	/// Fails if `json` is not an array, or if any element is `null` or an invalid entry.
	/// The error names the index of the offending element.
	pub fn from_json(json: &JsonValue) -> Result<Self> {
		let array = json.as_array().context("expected 'variableMatrixWidths' to be an array")?;

		let mut entries = Vec::with_capacity(array.len());
		for (index, value) in array.iter().enumerate() {
			let entry = VariableMatrixWidth::from_json_value(Some(value))
				.and_then(|entry| {
					entry.ok_or_else(|| ModelError::single(None, FieldErrorKind::NotAnObject { found: "null" }))
				})
				.with_context(|| format!("variable matrix width at index {index}"))?;
			entries.push(entry);
		}
		Ok(VariableMatrixWidths(entries))
	}

	#[must_use]
	pub fn as_json_value(&self) -> JsonValue {
		JsonValue::Array(self.0.iter().map(JsonValue::from).collect::<JsonArray>())
	}

	/// Coalescing factor for `row`: taken from the first entry covering it, `1` if none does.
	#[must_use]
	pub fn coalesce_for_row(&self, row: u64) -> f64 {
		self
			.0
			.iter()
			.find(|entry| entry.covers_row(row))
			.map_or(1.0, VariableMatrixWidth::coalesce)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, VariableMatrixWidth> {
		self.0.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromIterator<VariableMatrixWidth> for VariableMatrixWidths {
	fn from_iter<I: IntoIterator<Item = VariableMatrixWidth>>(iter: I) -> Self {
		VariableMatrixWidths(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a VariableMatrixWidths {
	type Item = &'a VariableMatrixWidth;
	type IntoIter = std::slice::Iter<'a, VariableMatrixWidth>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
