use thiserror::Error;

/// Errors raised by object storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("prefix not found: {prefix}")]
    PrefixNotFound { prefix: String },

    #[error("failed to list '{prefix}': {source}")]
    List {
        prefix: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Minimal object storage interface: list under a prefix, read and write
/// whole objects by key.
///
/// Keys are `/`-separated paths relative to the bucket root. Retry and
/// authentication semantics belong to the implementation, not the callers.
pub trait ObjectStore {
    /// Lists the object keys directly under `prefix`, sorted by key.
    fn list_objects(&self, prefix: &str) -> Result<Vec<String>>;

    /// Reads the full contents of one object.
    fn read_object(&self, key: &str) -> Result<Vec<u8>>;

    /// Writes an object, replacing any existing object at `key`.
    fn write_object(&self, key: &str, bytes: &[u8]) -> Result<()>;
}
