//! Core data model for the sellout compilation pipeline.
//!
//! Input files carry per-file-varying schemas, so rows are modeled as a
//! dynamic [`Batch`] table rather than a fixed record type. The canonical
//! output contract lives in [`schema`] and is materialized only at the
//! final projection step.

pub mod batch;
pub mod error;
pub mod period;
pub mod schema;

pub use batch::Batch;
pub use error::{Result, SelloutError};
pub use period::Period;
pub use schema::{CANONICAL_COLUMNS, MissingColumnPolicy, columns};
