//! Storage layer for filmshelf
//!
//! JSON-file-backed catalog store. The backing file holds a single JSON
//! array of records and is rewritten in full on every mutation; the
//! rewrite goes through a sibling temp file and a rename so a crash
//! mid-write cannot truncate the catalog.

mod catalog;
mod error;
#[cfg(test)]
mod tests;

pub use catalog::CatalogStore;
pub use error::StorageError;
