//! Shared constants for filmshelf.

/// Base URL of the external film listing service.
pub const FILM_SOURCE_BASE_URL: &str = "https://ghibliapi.vercel.app";

/// Timeout for the outbound film-source request, in seconds. One shot,
/// no retry.
pub const FETCH_TIMEOUT_SECS: u64 = 5;

/// Genre assigned to every imported record. The external source carries
/// a single genre, so it is not present in the response payload.
pub const IMPORTED_GENRE: &str = "Animation";

/// Default recommendation threshold when the caller does not specify one.
pub const DEFAULT_MIN_RATING: f64 = 8.0;

/// The external source reports scores on a 0-100 scale; the catalog
/// stores 0-10.
pub const SCORE_SCALE_DIVISOR: f64 = 10.0;
