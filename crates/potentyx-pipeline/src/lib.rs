//! potentyx-pipeline: Runs the five stages end to end:
//! ChEMBL clean → PubChem clean → merge → rank → plot.

pub mod pipeline;

pub use pipeline::{run, RunSummary};
