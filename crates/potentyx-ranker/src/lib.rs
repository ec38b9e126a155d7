//! potentyx-ranker: Merging of cleaned sources and potency ranking.

pub mod merge;
pub mod rank;

pub use merge::merge_sources;
pub use rank::{rank_candidates, sort_by_potency, DEFAULT_TOP_N};
