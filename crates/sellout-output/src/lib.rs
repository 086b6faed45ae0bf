//! Publisher stage: serializes the final batch as semicolon-delimited
//! UTF-8 and writes it to the trusted object for the period, overwriting
//! any previous run's output.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::info;

use sellout_model::{Batch, Period};
use sellout_store::{ObjectStore, trusted_object};

/// Serializes a batch as semicolon-delimited CSV with a header row.
pub fn batch_to_csv_bytes(batch: &Batch) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(Vec::new());
    writer
        .write_record(batch.columns())
        .context("write header")?;
    for row in batch.rows() {
        writer.write_record(row).context("write row")?;
    }
    writer.into_inner().context("flush csv writer")
}

/// Writes the compiled batch to the period's trusted object.
///
/// Last writer wins; no post-write verification is performed. Returns the
/// object key that was written.
pub fn publish<S: ObjectStore>(store: &S, period: Period, batch: &Batch) -> Result<String> {
    let key = trusted_object(period);
    let bytes = batch_to_csv_bytes(batch)?;
    store
        .write_object(&key, &bytes)
        .with_context(|| format!("write trusted object '{key}'"))?;
    info!(key = %key, rows = batch.height(), "published compiled sellout");
    Ok(key)
}
