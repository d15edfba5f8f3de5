//! Default location of the backing catalog file.

use std::path::PathBuf;

/// Default catalog path: `<data_local_dir>/filmshelf/movies.json`, falling
/// back to the current directory when the platform reports no data dir.
pub fn default_catalog_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("filmshelf")
        .join("movies.json")
}
