use filmshelf_core::{IMPORTED_GENRE, MovieRecord, SCORE_SCALE_DIVISOR};
use serde::Deserialize;
use serde_json::Value;

/// One entry from the external film listing.
///
/// The source types its numeric fields loosely (scores and release dates
/// arrive as strings or numbers depending on the entry), so they are kept
/// as raw JSON values here and parsed during mapping.
#[derive(Debug, Deserialize)]
pub struct FilmEntry {
    pub title: String,
    #[serde(default)]
    pub rt_score: Value,
    #[serde(default)]
    pub release_date: Value,
}

impl FilmEntry {
    /// Map this entry to a catalog record.
    ///
    /// Returns `None` when a numeric field cannot be parsed; the caller
    /// skips the entry and keeps scanning instead of aborting the import.
    pub fn to_record(&self) -> Option<MovieRecord> {
        let score = parse_loose_number(&self.rt_score)?;
        let year = parse_loose_year(&self.release_date)?;
        Some(MovieRecord::new(
            self.title.clone(),
            IMPORTED_GENRE,
            score / SCORE_SCALE_DIVISOR,
            year,
            false,
        ))
    }
}

/// Accept a JSON number or a numeric string.
fn parse_loose_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Accept an integer year or a string whose first four characters are the
/// year ("2001" or "2001-07-20").
fn parse_loose_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => {
            let head: String = s.trim().chars().take(4).collect();
            head.parse().ok()
        },
        _ => None,
    }
}
