use std::fmt;

use crate::error::{Result, SelloutError};

/// The (month, year) pair that scopes one pipeline run.
///
/// Selects which raw objects are listed, which rows survive filtering, and
/// where the compiled output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    month: u32,
    year: i32,
}

impl Period {
    /// Creates a period, rejecting months outside 1-12.
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(SelloutError::InvalidPeriod { month, year });
        }
        Ok(Self { month, year })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}
