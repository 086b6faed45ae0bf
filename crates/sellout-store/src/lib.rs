//! Object storage seam for the sellout pipeline.
//!
//! The pipeline only ever needs three operations against the bucket: list
//! the objects under a prefix, read one object, write one object. Those
//! live behind [`ObjectStore`] so the stages stay independent of the
//! transport; [`LocalStore`] is the directory-backed implementation used by
//! the CLI and tests.

pub mod layout;
pub mod local;
pub mod store;

pub use layout::{raw_prefix, trusted_object};
pub use local::LocalStore;
pub use store::{ObjectStore, StoreError};
