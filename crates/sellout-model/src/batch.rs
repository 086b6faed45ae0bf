use crate::error::{Result, SelloutError};

/// An in-memory table with a per-file-varying column set.
///
/// Cells are trimmed strings; the empty string stands for a missing value.
/// Batches are transient: built by the loader, mutated in place by the
/// normalizer, serialized once by the publisher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Batch {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Appends a row, padding or truncating to the current column count.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Returns an owned copy of one column's cells, top to bottom.
    pub fn column_values(&self, name: &str) -> Option<Vec<String>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].clone()).collect())
    }

    /// Rewrites every cell of a column in place. No-op if the column is absent.
    pub fn map_column<F>(&mut self, name: &str, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        let Some(idx) = self.column_index(name) else {
            return;
        };
        for row in &mut self.rows {
            row[idx] = f(&row[idx]);
        }
    }

    /// Renames a column. No-op if the source column is absent.
    pub fn rename_column(&mut self, from: &str, to: &str) {
        if let Some(idx) = self.column_index(from) {
            self.columns[idx] = to.to_string();
        }
    }

    /// Sets a full column of values, overwriting an existing column of the
    /// same name or appending a new one.
    ///
    /// `values` must have one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(SelloutError::Shape(format!(
                "column '{name}' has {} values for {} rows",
                values.len(),
                self.rows.len()
            )));
        }
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }

    /// Appends a column filled with empty cells. No-op if it already exists.
    pub fn add_empty_column(&mut self, name: &str) {
        if self.has_column(name) {
            return;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
    }

    /// Keeps only the rows for which the predicate returns true.
    pub fn retain_rows<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&[String]) -> bool,
    {
        self.rows.retain(|row| predicate(row));
    }

    /// Vertically concatenates another batch, taking the union of the two
    /// column sets. Cells a side never had are filled with empty strings.
    pub fn append_union(&mut self, other: Batch) {
        for column in &other.columns {
            self.add_empty_column(column);
        }
        let indices: Vec<usize> = other
            .columns
            .iter()
            .map(|c| self.column_index(c).unwrap_or_default())
            .collect();
        for row in other.rows {
            let mut merged = vec![String::new(); self.columns.len()];
            for (value, &idx) in row.into_iter().zip(&indices) {
                merged[idx] = value;
            }
            self.rows.push(merged);
        }
    }

    /// Projects the batch onto exactly the named columns, in that order.
    ///
    /// Fails listing every requested column the batch does not have.
    pub fn select(&self, names: &[&str]) -> Result<Batch> {
        let mut indices = Vec::with_capacity(names.len());
        let mut missing = Vec::new();
        for name in names {
            match self.column_index(name) {
                Some(idx) => indices.push(idx),
                None => missing.push((*name).to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(SelloutError::MissingColumns { columns: missing });
        }
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&idx| row[idx].clone()).collect())
            .collect();
        Ok(Batch {
            columns: names.iter().map(|n| (*n).to_string()).collect(),
            rows,
        })
    }
}
