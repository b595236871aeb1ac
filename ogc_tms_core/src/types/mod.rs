//! Data model types of the OGC Tile Matrix Set API.

mod variable_matrix_width;
pub use variable_matrix_width::*;

mod variable_matrix_widths;
pub use variable_matrix_widths::*;
