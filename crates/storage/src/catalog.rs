use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use filmshelf_core::{MovieRecord, title_key};

use crate::error::StorageError;

/// Durable mapping from a file path to an ordered sequence of records.
///
/// The store keeps the whole catalog in memory and mirrors it to disk on
/// every append. It performs no uniqueness checks; dedup is the sync
/// agent's job. Single-process access is assumed, concurrent writers race
/// on the full-file rewrite (last writer wins).
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    movies: Vec<MovieRecord>,
}

impl CatalogStore {
    /// Open a store backed by `path`, loading existing records.
    ///
    /// A missing file is an empty catalog, not an error. A file that exists
    /// but does not parse is fatal ([`StorageError::CorruptData`]).
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let movies = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|source| StorageError::CorruptData { path: path.clone(), source })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(StorageError::Io { path: path.clone(), source }),
        };
        tracing::debug!(path = %path.display(), count = movies.len(), "catalog loaded");
        Ok(Self { path, movies })
    }

    /// Append one record and rewrite the backing file.
    ///
    /// # Errors
    /// Returns an error if serialization or the file rewrite fails.
    pub fn append_and_persist(&mut self, record: MovieRecord) -> Result<(), StorageError> {
        self.movies.push(record);
        self.persist()
    }

    /// Construct a record from the given fields and append it (manual
    /// insertion path; the sync agent goes through [`Self::append_and_persist`]
    /// directly).
    ///
    /// # Errors
    /// Returns an error if the file rewrite fails.
    pub fn add_movie(
        &mut self,
        title: impl Into<String>,
        genre: impl Into<String>,
        rating: f64,
        year: i32,
        watched: bool,
    ) -> Result<MovieRecord, StorageError> {
        let record = MovieRecord::new(title, genre, rating, year, watched);
        self.append_and_persist(record.clone())?;
        Ok(record)
    }

    /// All records, insertion order preserved.
    pub fn list_all(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Records whose genre equals `genre` case-insensitively. Order
    /// preserved, no limit.
    pub fn find_by_genre(&self, genre: &str) -> Vec<MovieRecord> {
        let wanted = genre.to_lowercase();
        self.movies.iter().filter(|m| m.genre.to_lowercase() == wanted).cloned().collect()
    }

    /// Records with `rating >= threshold` (inclusive), order preserved.
    pub fn find_by_min_rating(&self, threshold: f64) -> Vec<MovieRecord> {
        self.movies.iter().filter(|m| m.rating >= threshold).cloned().collect()
    }

    /// Whether any record's title matches `title` case-insensitively.
    pub fn contains_title(&self, title: &str) -> bool {
        let key = title_key(title);
        self.movies.iter().any(|m| m.title_key() == key)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the whole catalog and atomically replace the backing file
    /// (write to a sibling temp file, then rename over the target).
    fn persist(&self) -> Result<(), StorageError> {
        let json =
            serde_json::to_string_pretty(&self.movies).map_err(StorageError::Serialize)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|source| StorageError::Io { path: tmp.clone(), source })?;
        fs::rename(&tmp, &self.path)
            .map_err(|source| StorageError::Io { path: self.path.clone(), source })?;
        tracing::debug!(
            path = %self.path.display(),
            count = self.movies.len(),
            "catalog persisted"
        );
        Ok(())
    }
}
