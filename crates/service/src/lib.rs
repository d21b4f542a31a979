//! Service layer: the object store and the catalog business rules on top of it.
//! - `storage` holds the pluggable `Storage` seam and its JSON file implementation.
//! - `catalog` implements per-resource create/read/update/delete with the
//!   validation and reference checks the HTTP layer exposes.

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod catalog;
#[cfg(test)]
pub mod test_support;
