//! potentyx-common: Shared types, errors, and potency maths used across all Potentyx crates.

pub mod error;
pub mod entities;
pub mod potency;

// Re-export commonly used types
pub use entities::{Interpretation, Measurement, RankedCandidate, Source};
pub use error::{PotentyxError, Result};
