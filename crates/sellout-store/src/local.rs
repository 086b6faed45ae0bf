//! Directory-backed [`ObjectStore`] implementation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::store::{ObjectStore, Result, StoreError};

/// An object store rooted at a local directory (a mounted bucket).
///
/// Object keys map to paths under the root; writes create missing parent
/// directories so the trusted layout does not need to pre-exist.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, key: &str) -> PathBuf {
        let mut path = self.root.clone();
        for part in key.split('/').filter(|p| !p.is_empty()) {
            path.push(part);
        }
        path
    }
}

impl ObjectStore for LocalStore {
    fn list_objects(&self, prefix: &str) -> Result<Vec<String>> {
        let dir = self.resolve(prefix);
        if !dir.is_dir() {
            return Err(StoreError::PrefixNotFound {
                prefix: prefix.to_string(),
            });
        }
        let entries = fs::read_dir(&dir).map_err(|source| StoreError::List {
            prefix: prefix.to_string(),
            source,
        })?;
        let base = prefix.trim_end_matches('/');
        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::List {
                prefix: prefix.to_string(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                keys.push(format!("{base}/{name}"));
            }
        }
        keys.sort();
        debug!(prefix, count = keys.len(), "listed objects");
        Ok(keys)
    }

    fn read_object(&self, key: &str) -> Result<Vec<u8>> {
        fs::read(self.resolve(key)).map_err(|source| StoreError::Read {
            key: key.to_string(),
            source,
        })
    }

    fn write_object(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.resolve(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                key: key.to_string(),
                source,
            })?;
        }
        fs::write(&path, bytes).map_err(|source| StoreError::Write {
            key: key.to_string(),
            source,
        })
    }
}
