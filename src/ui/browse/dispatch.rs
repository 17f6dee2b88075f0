//! Pure decisions made around a fetch: which endpoint, what to recommend,
//! and how to word a failure.

use crate::tmdb::{Movie, TmdbError, TmdbErrorKind};

pub const EMPTY_RESULTS_MESSAGE: &str = "No movies found for this search.";
pub const MISSING_CREDENTIAL_MESSAGE: &str = "API configuration error. Please contact support.";
pub const UNAUTHORIZED_MESSAGE: &str = "Invalid API key. Please check your configuration.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch movies. Please try again.";

/// Which catalogue operation a fetch uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRequest {
    Popular,
    ByName { query: String },
    ByGenre { genre_id: u32 },
    ByNameAndGenre { query: String, genre_id: u32 },
}

impl CatalogRequest {
    /// Precedence: both filters, query only, genre only, neither.
    pub fn select(query: &str, genre: Option<u32>) -> Self {
        let query = query.trim();
        let genre = genre.filter(|&g| g != 0);
        match (query.is_empty(), genre) {
            (false, Some(genre_id)) => CatalogRequest::ByNameAndGenre {
                query: query.to_string(),
                genre_id,
            },
            (false, None) => CatalogRequest::ByName {
                query: query.to_string(),
            },
            (true, Some(genre_id)) => CatalogRequest::ByGenre { genre_id },
            (true, None) => CatalogRequest::Popular,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CatalogRequest::Popular => "popular",
            CatalogRequest::ByName { .. } => "search_by_name",
            CatalogRequest::ByGenre { .. } => "search_by_genre",
            CatalogRequest::ByNameAndGenre { .. } => "search_by_name_and_genre",
        }
    }
}

/// Highest-rated movie with a positive score; ties go to the earliest.
pub fn recommended(movies: &[Movie]) -> Option<&Movie> {
    movies
        .iter()
        .filter(|m| m.rating() > 0.0)
        .fold(None, |best: Option<&Movie>, movie| match best {
            Some(b) if movie.rating() <= b.rating() => Some(b),
            _ => Some(movie),
        })
}

/// User-facing text for a failed fetch, chosen by error kind.
pub fn failure_message(err: &TmdbError) -> &'static str {
    if err.kind() == TmdbErrorKind::MissingCredential {
        MISSING_CREDENTIAL_MESSAGE
    } else if err.is_unauthorized() {
        UNAUTHORIZED_MESSAGE
    } else {
        GENERIC_FAILURE_MESSAGE
    }
}

pub fn query_too_short_message(min_len: usize) -> String {
    format!("Search query must be at least {} characters long.", min_len)
}

pub fn found_message(count: usize, page: u32) -> String {
    format!("Found {} movies on page {}!", count, page)
}

pub fn recommendation_message(movie: &Movie) -> String {
    format!("Recommended: {}", movie.title)
}
