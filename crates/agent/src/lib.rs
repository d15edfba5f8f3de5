//! Sync agent for filmshelf
//!
//! One-shot import of a single title from the external film listing into
//! the catalog store: fetch, case-insensitive title match, field mapping,
//! dedup check, conditional persist.

mod agent;
mod client;
mod error;
mod film;
#[cfg(test)]
mod tests;

pub use agent::SyncAgent;
pub use client::FilmClient;
pub use error::SourceError;
pub use film::FilmEntry;
