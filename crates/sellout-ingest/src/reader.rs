//! Semicolon-delimited CSV parsing into a [`Batch`].

use csv::ReaderBuilder;
use thiserror::Error;

use sellout_model::Batch;

/// Field separator used by every vendor export and by the compiled output.
pub const DELIMITER: u8 = b';';

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("file has no header row")]
    MissingHeader,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

/// Parses semicolon-delimited UTF-8 bytes into a batch.
///
/// Headers and cells are trimmed; a BOM on the first header is stripped.
/// Records shorter than the header are padded with empty cells, longer
/// ones truncated, so one ragged row does not fail the file.
pub fn read_batch(bytes: &[u8]) -> Result<Batch, ReadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(ReadError::MissingHeader);
    }
    let columns: Vec<String> = headers.iter().map(normalize_header).collect();
    let width = columns.len();

    let mut batch = Batch::new(columns);
    for record in reader.records() {
        let record = record?;
        let mut row = Vec::with_capacity(width);
        for idx in 0..width {
            row.push(normalize_cell(record.get(idx).unwrap_or("")));
        }
        batch.push_row(row);
    }
    Ok(batch)
}
