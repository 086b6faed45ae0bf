//! Period-scoped loading of raw vendor exports.

use tracing::{info, warn};

use sellout_model::{Batch, Period, Result, SelloutError, columns};
use sellout_store::{ObjectStore, raw_prefix};

use crate::dates::{format_report_date, parse_report_date};
use crate::reader::read_batch;

/// One input file the loader could not read; the run continues without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub key: String,
    pub error: String,
}

/// What the loader found and did for one period.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// CSV objects discovered under the raw prefix.
    pub files_found: usize,
    /// Successfully read files with their row counts, in discovery order.
    pub loaded: Vec<(String, usize)>,
    /// Files skipped after a read or parse failure.
    pub skipped: Vec<SkippedFile>,
}

impl LoadReport {
    pub fn files_loaded(&self) -> usize {
        self.loaded.len()
    }

    pub fn rows_loaded(&self) -> usize {
        self.loaded.iter().map(|(_, rows)| rows).sum()
    }
}

/// Loads every readable CSV for the period into one unified batch.
///
/// Files are read in listing order; per-file failures are logged and
/// skipped. The unified batch's column set is the union of the per-file
/// columns, with empty cells where a source file lacked a column.
///
/// # Errors
///
/// Returns [`SelloutError::NoInputData`] when the prefix holds no CSV
/// objects or every read failed. Downstream stages must not run in that
/// case; the loader never returns a silently empty batch.
pub fn load_period<S: ObjectStore>(store: &S, period: Period) -> Result<(Batch, LoadReport)> {
    let prefix = raw_prefix(period);
    let keys = match store.list_objects(&prefix) {
        Ok(keys) => keys,
        Err(error) => {
            return Err(SelloutError::NoInputData {
                prefix,
                detail: error.to_string(),
            });
        }
    };
    let csv_keys: Vec<String> = keys
        .into_iter()
        .filter(|key| {
            key.rsplit('.')
                .next()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();
    info!(%prefix, files = csv_keys.len(), "discovered raw files");

    let mut report = LoadReport {
        files_found: csv_keys.len(),
        ..LoadReport::default()
    };
    let mut unified: Option<Batch> = None;

    for key in &csv_keys {
        match load_file(store, key) {
            Ok(batch) => {
                info!(file = %key, rows = batch.height(), "file loaded");
                report.loaded.push((key.clone(), batch.height()));
                match unified.as_mut() {
                    Some(existing) => existing.append_union(batch),
                    None => unified = Some(batch),
                }
            }
            Err(error) => {
                warn!(file = %key, %error, "skipping unreadable file");
                report.skipped.push(SkippedFile {
                    key: key.clone(),
                    error: error.to_string(),
                });
            }
        }
    }

    match unified {
        Some(batch) => Ok((batch, report)),
        None => Err(SelloutError::NoInputData {
            prefix,
            detail: if report.files_found == 0 {
                "no csv objects found".to_string()
            } else {
                format!("all {} files failed to load", report.files_found)
            },
        }),
    }
}

fn load_file<S: ObjectStore>(store: &S, key: &str) -> anyhow::Result<Batch> {
    let bytes = store.read_object(key)?;
    let mut batch = read_batch(&bytes)?;
    derive_data_column(&mut batch)?;
    Ok(batch)
}

/// Derives the normalized `Data` column from a raw `DATA` column.
///
/// Each raw value gets two parse attempts (`DD/MM/YYYY`, then ISO over the
/// same original text); successes are rewritten in the reporting format and
/// double failures become empty cells, which the period filter later
/// excludes. No-op for files without a `DATA` column.
fn derive_data_column(batch: &mut Batch) -> Result<()> {
    let Some(raw) = batch.column_values(columns::DATA_RAW) else {
        return Ok(());
    };
    let parsed: Vec<String> = raw
        .iter()
        .map(|value| {
            parse_report_date(value)
                .map(format_report_date)
                .unwrap_or_default()
        })
        .collect();
    batch.set_column(columns::DATA, parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use tempfile::TempDir;

    use sellout_store::LocalStore;

    fn store_with_files(files: &[(&str, &str)]) -> (TempDir, LocalStore) {
        let dir = TempDir::new().unwrap();
        let raw = dir.path().join("raw/jbp/2024/10");
        fs::create_dir_all(&raw).unwrap();
        for (name, content) in files {
            fs::write(raw.join(name), content).unwrap();
        }
        let store = LocalStore::new(dir.path());
        (dir, store)
    }

    fn period() -> Period {
        Period::new(10, 2024).unwrap()
    }

    #[test]
    fn concatenates_files_in_discovery_order_with_column_union() {
        let (_dir, store) = store_with_files(&[
            ("a.csv", "Varejista;EAN\nAmigao;1\n"),
            ("b.csv", "Varejista;Loja\nSams;Centro\n"),
        ]);

        let (batch, report) = load_period(&store, period()).unwrap();
        assert_eq!(report.files_found, 2);
        assert_eq!(report.files_loaded(), 2);
        assert_eq!(batch.height(), 2);
        assert_eq!(batch.columns(), &["Varejista", "EAN", "Loja"]);
        // Second file had no EAN column.
        assert_eq!(batch.rows()[1], vec!["Sams", "", "Centro"]);
    }

    #[test]
    fn derives_data_from_mixed_date_encodings() {
        let (_dir, store) = store_with_files(&[(
            "a.csv",
            "DATA;EAN\n05/10/2024;1\n2024-10-06;2\nbogus;3\n",
        )]);

        let (batch, _) = load_period(&store, period()).unwrap();
        assert_eq!(
            batch.column_values("Data").unwrap(),
            vec!["05/10/2024", "06/10/2024", ""]
        );
        // Raw column is kept; projection drops it later.
        assert!(batch.has_column("DATA"));
    }

    #[test]
    fn skips_unreadable_files_and_keeps_the_rest() {
        let (_dir, store) = store_with_files(&[
            ("a.csv", "EAN\n1\n"),
            ("bad.csv", "placeholder"),
            ("c.csv", "EAN\n2\n"),
        ]);
        // Overwrite bad.csv with invalid UTF-8 bytes.
        let raw = _dir.path().join("raw/jbp/2024/10/bad.csv");
        fs::write(raw, [b'E', b'A', b'N', b'\n', 0xff, 0xfe]).unwrap();

        let (batch, report) = load_period(&store, period()).unwrap();
        assert_eq!(batch.height(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.skipped[0].key.ends_with("bad.csv"));
    }

    #[test]
    fn ignores_non_csv_objects() {
        let (_dir, store) = store_with_files(&[
            ("a.csv", "EAN\n1\n"),
            ("notes.txt", "not a csv"),
        ]);

        let (_, report) = load_period(&store, period()).unwrap();
        assert_eq!(report.files_found, 1);
    }

    #[test]
    fn empty_period_is_a_distinct_terminal_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("raw/jbp/2024/10")).unwrap();
        let store = LocalStore::new(dir.path());

        let err = load_period(&store, period()).unwrap_err();
        assert!(matches!(err, SelloutError::NoInputData { .. }));
    }

    #[test]
    fn missing_prefix_is_a_distinct_terminal_error() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::new(dir.path());

        let err = load_period(&store, period()).unwrap_err();
        assert!(matches!(err, SelloutError::NoInputData { .. }));
    }
}
