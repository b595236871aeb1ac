//! Validated data model for the variable matrix widths of OGC Tile Matrix Sets,
//! together with the JSON codec it is read from and written to.

pub mod error;

pub mod json;

pub mod types;

pub use error::{FieldError, FieldErrorKind, ModelError};
pub use types::{Field, VariableMatrixWidth, VariableMatrixWidths};
