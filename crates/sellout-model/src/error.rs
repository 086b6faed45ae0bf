use thiserror::Error;

/// Errors surfaced by the sellout pipeline stages.
#[derive(Debug, Error)]
pub enum SelloutError {
    /// No readable CSV data existed for the requested period.
    ///
    /// This is distinct from an empty batch: the loader refuses to hand an
    /// empty table downstream, so normalize/publish never run.
    #[error("no input data under '{prefix}': {detail}")]
    NoInputData { prefix: String, detail: String },

    /// Canonical columns absent at projection time under the reject policy.
    #[error("missing canonical columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Invalid period parameters (month outside 1-12).
    #[error("invalid period: month {month} year {year}")]
    InvalidPeriod { month: u32, year: i32 },

    /// A column write whose value count does not match the batch height.
    #[error("shape mismatch: {0}")]
    Shape(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SelloutError>;
