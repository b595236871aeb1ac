//! Reading and validating variable matrix width documents.
//!
//! Three document shapes are understood:
//! - a single entry object: `{"coalesce":2,"minTileRow":0,"maxTileRow":0}`
//! - an array of entries
//! - a tile matrix object carrying a `variableMatrixWidths` array

use anyhow::{Context, Result};
use log::debug;
use ogc_tms_core::{
	VariableMatrixWidth, VariableMatrixWidths,
	json::{JsonValue, parse_json_str},
};
use std::{fs, io::Read, path::Path};

const TILE_MATRIX_KEY: &str = "variableMatrixWidths";

/// Reads the whole document from `filename`, or from standard input if it is `-`.
pub fn read_input(filename: &str) -> Result<String> {
	if filename == "-" {
		let mut text = String::new();
		std::io::stdin()
			.read_to_string(&mut text)
			.context("reading standard input")?;
		Ok(text)
	} else {
		let path = Path::new(filename);
		fs::read_to_string(path).with_context(|| format!("reading file {path:?}"))
	}
}

/// Parses and validates a document, returning its entries in document order.
pub fn check_json(text: &str) -> Result<VariableMatrixWidths> {
	let json = parse_json_str(text)?;
	match &json {
		JsonValue::Array(_) => VariableMatrixWidths::from_json(&json),
		JsonValue::Object(object) => {
			if let Some(widths) = object.get(TILE_MATRIX_KEY) {
				debug!("found '{TILE_MATRIX_KEY}' in tile matrix object");
				VariableMatrixWidths::from_json(widths).with_context(|| format!("in '{TILE_MATRIX_KEY}'"))
			} else {
				let entry = VariableMatrixWidth::from_json_object(object)?;
				Ok(VariableMatrixWidths(vec![entry]))
			}
		}
		other => anyhow::bail!(
			"expected an object or an array, found a {}",
			other.type_as_str()
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn error_chain(text: &str) -> String {
		check_json(text)
			.unwrap_err()
			.chain()
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join("\n")
	}

	#[test]
	fn single_entry() -> Result<()> {
		let widths = check_json(r#"{"coalesce":2,"minTileRow":0,"maxTileRow":5}"#)?;
		assert_eq!(widths.0, vec![VariableMatrixWidth::new(2, 0, 5)?]);
		Ok(())
	}

	#[test]
	fn array_of_entries() -> Result<()> {
		let widths = check_json(r#"[{"coalesce":2,"minTileRow":0,"maxTileRow":0},{"coalesce":3,"minTileRow":9,"maxTileRow":9}]"#)?;
		assert_eq!(widths.len(), 2);
		Ok(())
	}

	#[test]
	fn tile_matrix_object() -> Result<()> {
		let widths = check_json(
			r#"{"id":"1","matrixWidth":4,"variableMatrixWidths":[{"coalesce":2,"minTileRow":0,"maxTileRow":0}]}"#,
		)?;
		assert_eq!(widths.coalesce_for_row(0), 2.0);
		Ok(())
	}

	#[test]
	fn invalid_entry() {
		assert_eq!(
			error_chain(r#"{"coalesce":2.5,"minTileRow":0,"maxTileRow":1}"#),
			"1 validation error for VariableMatrixWidth\n  coalesce: value must be a whole number, got 2.5"
		);
	}

	#[test]
	fn invalid_entry_in_tile_matrix() {
		assert_eq!(
			error_chain(r#"{"variableMatrixWidths":[{"coalesce":2,"minTileRow":-1,"maxTileRow":1}]}"#),
			"in 'variableMatrixWidths'\nvariable matrix width at index 0\n1 validation error for VariableMatrixWidth\n  minTileRow: value must be greater than or equal to 0, got -1"
		);
	}

	#[test]
	fn scalar_document() {
		assert_eq!(error_chain("42"), "expected an object or an array, found a number");
	}

	#[test]
	fn invalid_json() {
		assert!(error_chain("{").starts_with("while parsing JSON '{'"));
	}
}
