//! Test utilities and module declarations for storage tests.

use filmshelf_core::MovieRecord;
use tempfile::TempDir;

use crate::CatalogStore;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_store() -> (CatalogStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("movies.json");
    let store = CatalogStore::open(&path).unwrap();
    (store, temp_dir)
}

pub fn sample_record(title: &str, genre: &str, rating: f64, year: i32) -> MovieRecord {
    MovieRecord::new(title, genre, rating, year, false)
}
