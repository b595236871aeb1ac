//! Errors of the model layer.

use crate::types::Field;
use std::fmt::{self, Display};
use thiserror::Error;

/// Why a model could not be built.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelError {
	/// One or more values broke their constraints. Every failing field is listed.
	#[error("{}", ValidationErrors(.0))]
	Validation(Vec<FieldError>),

	/// The input text is not JSON.
	#[error("invalid JSON: {0}")]
	Parse(String),
}

impl ModelError {
	pub(crate) fn single(field: Option<Field>, kind: FieldErrorKind) -> Self {
		ModelError::Validation(vec![FieldError { field, kind }])
	}

	/// The field errors of a validation failure, empty for parse errors.
	#[must_use]
	pub fn field_errors(&self) -> &[FieldError] {
		match self {
			ModelError::Validation(errors) => errors,
			ModelError::Parse(_) => &[],
		}
	}
}

/// A constraint violation of a single field, or of the whole input when `field` is `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
	pub field: Option<Field>,
	pub kind: FieldErrorKind,
}

impl Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.field {
			Some(field) => write!(f, "{}: {}", field.wire_name(), self.kind),
			None => write!(f, "{}", self.kind),
		}
	}
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldErrorKind {
	#[error("field required")]
	Missing,

	#[error("expected a number, found a {found}")]
	WrongType { found: &'static str },

	#[error("value must be a whole number, got {value}")]
	NotIntegral { value: f64 },

	#[error("value must be greater than or equal to {minimum}, got {value}")]
	BelowMinimum { minimum: u64, value: f64 },

	#[error("expected an object, found a {found}")]
	NotAnObject { found: &'static str },
}

struct ValidationErrors<'a>(&'a [FieldError]);

impl Display for ValidationErrors<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0.len() {
			1 => write!(f, "1 validation error for VariableMatrixWidth")?,
			n => write!(f, "{n} validation errors for VariableMatrixWidth")?,
		}
		for error in self.0 {
			write!(f, "\n  {error}")?;
		}
		Ok(())
	}
}
