//! Header and value normalisation.
//!
//! Two concerns are provided:
//! - `columns`: canonical column names and substring-based column detection
//! - `values`: coercion of raw IC50 cells to numbers

pub mod columns;
pub mod values;

pub use columns::{detect_column, find_column, normalize_column_name};
pub use values::parse_ic50;
