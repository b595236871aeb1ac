//! Variable matrix width: one entry of the `variableMatrixWidths` array of an OGC tile matrix.
//!
//! Near the poles some tile matrix sets merge several tile columns into a single wider tile.
//! An entry states the coalescing factor and the inclusive range of tile rows it applies to:
//!
//! ```json
//! { "coalesce": 2, "minTileRow": 0, "maxTileRow": 0 }
//! ```
//!
//! Entries are always validated. `coalesce` must be an integer `>= 2`, both row bounds must be
//! integers `>= 0`. Integral floats such as `3.0` are accepted. Whether `minTileRow <= maxTileRow`
//! holds is not checked.
//!
//! Values are kept as `f64`, the JSON number type, so there is no upper bound: `1e20` is as valid
//! as `1` and is written back unchanged.

use crate::{
	error::{FieldError, FieldErrorKind, ModelError},
	json::{JsonObject, JsonValue, parse_json_str},
};
use log::trace;
use std::{fmt::Display, str::FromStr};

/// The fields of a [`VariableMatrixWidth`], with their internal and wire names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
	Coalesce,
	MinTileRow,
	MaxTileRow,
}

impl Field {
	pub const ALL: [Field; 3] = [Field::Coalesce, Field::MinTileRow, Field::MaxTileRow];

	/// Identifier used in Rust code, e.g. `min_tile_row`.
	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			Field::Coalesce => "coalesce",
			Field::MinTileRow => "min_tile_row",
			Field::MaxTileRow => "max_tile_row",
		}
	}

	/// Key used in JSON, e.g. `minTileRow`.
	#[must_use]
	pub fn wire_name(self) -> &'static str {
		match self {
			Field::Coalesce => "coalesce",
			Field::MinTileRow => "minTileRow",
			Field::MaxTileRow => "maxTileRow",
		}
	}

	#[must_use]
	pub fn minimum(self) -> u64 {
		match self {
			Field::Coalesce => 2,
			Field::MinTileRow | Field::MaxTileRow => 0,
		}
	}

	#[must_use]
	pub fn from_name(name: &str) -> Option<Field> {
		Field::ALL.into_iter().find(|field| field.name() == name)
	}

	#[must_use]
	pub fn from_wire_name(wire_name: &str) -> Option<Field> {
		Field::ALL.into_iter().find(|field| field.wire_name() == wire_name)
	}

	/// Checks one raw value: present, a number, integral, not below the minimum.
	fn validate(self, value: Option<&JsonValue>) -> Result<f64, FieldError> {
		let error = |kind| FieldError { field: Some(self), kind };

		let number = match value {
			None => return Err(error(FieldErrorKind::Missing)),
			Some(JsonValue::Number(number)) => *number,
			Some(other) => {
				return Err(error(FieldErrorKind::WrongType {
					found: other.type_as_str(),
				}));
			}
		};

		if !number.is_finite() || number.fract() != 0.0 {
			return Err(error(FieldErrorKind::NotIntegral { value: number }));
		}
		if number < self.minimum() as f64 {
			return Err(error(FieldErrorKind::BelowMinimum {
				minimum: self.minimum(),
				value: number,
			}));
		}
		// -0 is stored as 0
		Ok(if number == 0.0 { 0.0 } else { number })
	}
}

impl Display for Field {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.wire_name())
	}
}

/// A validated "variable matrix width" entry.
///
/// The fields are private so that every instance satisfies the constraints;
/// use the setters to change a value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
	feature = "serde",
	serde(rename_all = "camelCase", try_from = "serde_impl::RawVariableMatrixWidth")
)]
pub struct VariableMatrixWidth {
	#[cfg_attr(feature = "serde", serde(serialize_with = "serde_impl::whole_number"))]
	coalesce: f64,
	#[cfg_attr(feature = "serde", serde(serialize_with = "serde_impl::whole_number"))]
	min_tile_row: f64,
	#[cfg_attr(feature = "serde", serde(serialize_with = "serde_impl::whole_number"))]
	max_tile_row: f64,
}

impl VariableMatrixWidth {
	/// Builds an entry from three numeric values.
	///
	/// Accepts anything that converts into a JSON number, so both `new(2, 0, 5)` and
	/// `new(2.0, 0.0, 5.0)` work, while `new(2.5, 0, 5)` and `new(2, -1, 5)` fail.
	pub fn new<C, N, X>(coalesce: C, min_tile_row: N, max_tile_row: X) -> Result<Self, ModelError>
	where
		JsonValue: From<C> + From<N> + From<X>,
	{
		let values = [
			<JsonValue as From<C>>::from(coalesce),
			<JsonValue as From<N>>::from(min_tile_row),
			<JsonValue as From<X>>::from(max_tile_row),
		];
		Self::from_values([Some(&values[0]), Some(&values[1]), Some(&values[2])])
	}

	/// Validates raw values given in [`Field::ALL`] order. `None` means absent.
	///
	/// All fields are checked, and every failure ends up in the returned error.
	fn from_values(values: [Option<&JsonValue>; 3]) -> Result<Self, ModelError> {
		let mut checked = [0.0; 3];
		let mut errors = Vec::new();
		for ((field, value), slot) in Field::ALL.into_iter().zip(values).zip(checked.iter_mut()) {
			match field.validate(value) {
				Ok(number) => *slot = number,
				Err(error) => errors.push(error),
			}
		}
		if !errors.is_empty() {
			return Err(ModelError::Validation(errors));
		}

		let [coalesce, min_tile_row, max_tile_row] = checked;
		Ok(VariableMatrixWidth {
			coalesce,
			min_tile_row,
			max_tile_row,
		})
	}

	/// Builds an entry from a JSON object with the wire names as keys.
	///
	/// Missing keys are reported as missing fields; unknown keys are ignored.
	pub fn from_json_object(object: &JsonObject) -> Result<Self, ModelError> {
		Self::from_values(Field::ALL.map(|field| object.get(field.wire_name())))
	}

	/// Builds an entry from an optional JSON value.
	///
	/// Returns `Ok(None)` for `None` and for JSON `null`. Any value that is not an
	/// object fails validation.
	pub fn from_json_value(value: Option<&JsonValue>) -> Result<Option<Self>, ModelError> {
		match value {
			None | Some(JsonValue::Null) => Ok(None),
			Some(JsonValue::Object(object)) => Self::from_json_object(object).map(Some),
			Some(other) => Err(ModelError::single(
				None,
				FieldErrorKind::NotAnObject {
					found: other.type_as_str(),
				},
			)),
		}
	}

	/// Parses JSON text. The document `null` yields `Ok(None)`.
	pub fn from_json(json: &str) -> Result<Option<Self>, ModelError> {
		trace!("parsing variable matrix width from {} bytes of JSON", json.len());
		let value = parse_json_str(json).map_err(|e| ModelError::Parse(format!("{e:#}")))?;
		Self::from_json_value(Some(&value))
	}

	#[must_use]
	pub fn coalesce(&self) -> f64 {
		self.coalesce
	}

	#[must_use]
	pub fn min_tile_row(&self) -> f64 {
		self.min_tile_row
	}

	#[must_use]
	pub fn max_tile_row(&self) -> f64 {
		self.max_tile_row
	}

	#[must_use]
	pub fn get(&self, field: Field) -> f64 {
		match field {
			Field::Coalesce => self.coalesce,
			Field::MinTileRow => self.min_tile_row,
			Field::MaxTileRow => self.max_tile_row,
		}
	}

	/// Replaces one value after validating it. On error the entry is left unchanged.
	pub fn set<T>(&mut self, field: Field, value: T) -> Result<(), ModelError>
	where
		JsonValue: From<T>,
	{
		let number = field
			.validate(Some(&JsonValue::from(value)))
			.map_err(|error| ModelError::Validation(vec![error]))?;
		match field {
			Field::Coalesce => self.coalesce = number,
			Field::MinTileRow => self.min_tile_row = number,
			Field::MaxTileRow => self.max_tile_row = number,
		}
		Ok(())
	}

	pub fn set_coalesce<T>(&mut self, value: T) -> Result<(), ModelError>
	where
		JsonValue: From<T>,
	{
		self.set(Field::Coalesce, value)
	}

	pub fn set_min_tile_row<T>(&mut self, value: T) -> Result<(), ModelError>
	where
		JsonValue: From<T>,
	{
		self.set(Field::MinTileRow, value)
	}

	pub fn set_max_tile_row<T>(&mut self, value: T) -> Result<(), ModelError>
	where
		JsonValue: From<T>,
	{
		self.set(Field::MaxTileRow, value)
	}

	/// Whether the coalescing factor applies to tile row `row`.
	#[must_use]
	pub fn covers_row(&self, row: u64) -> bool {
		let row = row as f64;
		self.min_tile_row <= row && row <= self.max_tile_row
	}

	/// The JSON object with wire names as keys. All fields are required, so all three are always present.
	#[must_use]
	pub fn to_json_object(&self) -> JsonObject {
		let mut object = JsonObject::new();
		for field in Field::ALL {
			object.set(field.wire_name(), self.get(field));
		}
		object
	}

	#[must_use]
	pub fn to_json_value(&self) -> JsonValue {
		JsonValue::Object(self.to_json_object())
	}

	/// Compact JSON.
	#[must_use]
	pub fn to_json(&self) -> String {
		self.to_json_object().stringify()
	}

	/// Indented JSON with sorted keys, meant for humans reading logs and terminal output.
	#[must_use]
	pub fn to_pretty_string(&self) -> String {
		self.to_json_object().stringify_pretty_multi_line(0, 0)
	}
}

impl Display for VariableMatrixWidth {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_json())
	}
}

impl FromStr for VariableMatrixWidth {
	type Err = ModelError;

	/// Like [`VariableMatrixWidth::from_json`], but `null` is an error.
	fn from_str(json: &str) -> Result<Self, Self::Err> {
		Self::from_json(json)?.ok_or_else(|| ModelError::single(None, FieldErrorKind::NotAnObject { found: "null" }))
	}
}

impl TryFrom<&JsonObject> for VariableMatrixWidth {
	type Error = ModelError;

	fn try_from(object: &JsonObject) -> Result<Self, Self::Error> {
		Self::from_json_object(object)
	}
}

impl From<&VariableMatrixWidth> for JsonValue {
	fn from(entry: &VariableMatrixWidth) -> Self {
		entry.to_json_value()
	}
}

#[cfg(feature = "serde")]
mod serde_impl {
	use super::VariableMatrixWidth;
	use crate::{error::ModelError, json::JsonValue};

	/// Unvalidated shape used by `Deserialize`; missing keys become `None`.
	#[derive(serde::Deserialize)]
	#[serde(rename_all = "camelCase")]
	pub struct RawVariableMatrixWidth {
		coalesce: Option<f64>,
		min_tile_row: Option<f64>,
		max_tile_row: Option<f64>,
	}

	impl TryFrom<RawVariableMatrixWidth> for VariableMatrixWidth {
		type Error = ModelError;

		fn try_from(raw: RawVariableMatrixWidth) -> Result<Self, Self::Error> {
			let values = [raw.coalesce, raw.min_tile_row, raw.max_tile_row].map(|v| v.map(JsonValue::Number));
			VariableMatrixWidth::from_values([values[0].as_ref(), values[1].as_ref(), values[2].as_ref()])
		}
	}

	/// Writes whole numbers that fit into a `u64` as integers, larger ones as floats.
	#[allow(clippy::trivially_copy_pass_by_ref)]
	pub fn whole_number<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
		if *value < 18_446_744_073_709_551_616.0 {
			serializer.serialize_u64(*value as u64)
		} else {
			serializer.serialize_f64(*value)
		}
	}
}
