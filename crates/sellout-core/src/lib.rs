//! Normalizer stage and pipeline orchestration.
//!
//! The normalizer carries all of the domain-specific repair logic: vendor
//! label canonicalization, numeric coercions, column renames, the period
//! filter, and the canonical projection. [`pipeline::run_period`] composes
//! Loader -> Normalizer -> Publisher for one period.

pub mod coerce;
pub mod normalize;
pub mod pipeline;

pub use normalize::normalize;
pub use pipeline::{RunConfig, RunSummary, SkippedFileSummary, run_period};
