//! One-period pipeline run: Loader -> Normalizer -> Publisher.

use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use sellout_ingest::load_period;
use sellout_model::{MissingColumnPolicy, Period};
use sellout_output::publish;
use sellout_store::{ObjectStore, trusted_object};

use crate::normalize::normalize;

/// Everything that parameterizes a run. There is no other configuration
/// and no state carried between runs.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub period: Period,
    pub missing_columns: MissingColumnPolicy,
    /// Run the load and normalize stages but skip the trusted write.
    pub dry_run: bool,
}

/// A file the run skipped, with the reason.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFileSummary {
    pub key: String,
    pub error: String,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub period: String,
    pub files_found: usize,
    pub files_loaded: usize,
    pub skipped: Vec<SkippedFileSummary>,
    pub input_rows: usize,
    pub published_rows: usize,
    pub output_key: String,
    pub dry_run: bool,
}

/// Runs the full pipeline for one period.
///
/// Stages execute strictly in sequence; a missing period short-circuits
/// before normalization, and nothing is written on `dry_run`.
pub fn run_period<S: ObjectStore>(store: &S, config: &RunConfig) -> Result<RunSummary> {
    let period = config.period;

    let load_span = info_span!("load", period = %period);
    let load_start = Instant::now();
    let (batch, report) = load_span
        .in_scope(|| load_period(store, period))
        .context("load raw sellout files")?;
    info!(
        period = %period,
        files = report.files_loaded(),
        rows = batch.height(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );
    let input_rows = batch.height();

    let normalize_span = info_span!("normalize", period = %period);
    let normalize_start = Instant::now();
    let compiled = normalize_span
        .in_scope(|| normalize(batch, period, config.missing_columns))
        .context("normalize unified batch")?;
    info!(
        period = %period,
        rows = compiled.height(),
        duration_ms = normalize_start.elapsed().as_millis(),
        "normalize complete"
    );

    let output_key = if config.dry_run {
        let key = trusted_object(period);
        info!(key = %key, rows = compiled.height(), "dry run, skipping publish");
        key
    } else {
        let publish_span = info_span!("publish", period = %period);
        publish_span
            .in_scope(|| publish(store, period, &compiled))
            .context("publish compiled batch")?
    };

    Ok(RunSummary {
        period: period.to_string(),
        files_found: report.files_found,
        files_loaded: report.files_loaded(),
        skipped: report
            .skipped
            .iter()
            .map(|s| SkippedFileSummary {
                key: s.key.clone(),
                error: s.error.clone(),
            })
            .collect(),
        input_rows,
        published_rows: compiled.height(),
        output_key,
        dry_run: config.dry_run,
    })
}
