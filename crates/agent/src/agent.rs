use filmshelf_core::{MovieRecord, title_key};
use filmshelf_storage::{CatalogStore, StorageError};

use crate::client::FilmClient;

/// One-shot lookup-and-import of a single title from the external catalog
/// service.
#[derive(Debug)]
pub struct SyncAgent {
    client: FilmClient,
}

impl SyncAgent {
    pub fn new(client: FilmClient) -> Self {
        Self { client }
    }

    /// Look up `title` in the external listing and import it into `store`.
    ///
    /// Returns `Ok(None)` both when the title is absent from the source and
    /// when the source is unreachable; only the log output tells the two
    /// apart. Re-fetching an already-imported title returns the mapped
    /// record without growing the store (idempotent re-fetch).
    ///
    /// Entries whose numeric fields cannot be parsed are skipped and the
    /// scan continues; the first entry that both matches the title and maps
    /// cleanly wins.
    ///
    /// # Errors
    /// Returns an error only when persisting the imported record fails.
    /// Source failures are never surfaced as errors here.
    pub async fn fetch_and_import(
        &self,
        store: &mut CatalogStore,
        title: &str,
    ) -> Result<Option<MovieRecord>, StorageError> {
        let films = match self.client.films().await {
            Ok(films) => films,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    transient = e.is_transient(),
                    "film source unavailable, reporting not found"
                );
                return Ok(None);
            },
        };

        let wanted = title_key(title);
        for film in &films {
            if title_key(&film.title) != wanted {
                continue;
            }
            let Some(record) = film.to_record() else {
                tracing::warn!(
                    title = %film.title,
                    "skipping source entry with unparsable numeric fields"
                );
                continue;
            };
            if store.contains_title(&record.title) {
                tracing::debug!(title = %record.title, "already in catalog, skipping persist");
            } else {
                store.append_and_persist(record.clone())?;
                tracing::info!(
                    title = %record.title,
                    rating = record.rating,
                    year = record.year,
                    "imported from film source"
                );
            }
            return Ok(Some(record));
        }

        tracing::debug!(title, "title not present in film source");
        Ok(None)
    }
}
