//! Checks OGC Tile Matrix Set documents for valid variable matrix widths.
//!
//! The data model lives in [`ogc_tms_core`] and is re-exported here.

pub mod check;

pub use ogc_tms_core::*;
