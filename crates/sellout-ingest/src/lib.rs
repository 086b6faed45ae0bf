//! Loader stage: discovers the raw CSV objects for a period, reads each
//! into a [`sellout_model::Batch`], repairs the date column, and
//! concatenates everything into one unified batch.
//!
//! Individual file failures are logged and skipped; a period with no
//! readable data at all is a distinct terminal condition.

pub mod dates;
pub mod loader;
pub mod reader;

pub use dates::{format_report_date, parse_report_date, parse_report_date_strict};
pub use loader::{LoadReport, SkippedFile, load_period};
pub use reader::read_batch;
