//! Remote movie service client.
//!
//! Four read operations (popular, name search, genre discovery, combined
//! name and genre search) and the three-step login handshake. Listings are
//! truncated to the requested size and shuffled before they are returned.

mod client;
mod error;
mod genre;
mod shape;
mod types;

use async_trait::async_trait;

pub use client::TmdbClient;
pub use error::{TmdbError, TmdbErrorKind};
pub use genre::{find_genre, genre_name, Genre, GENRES};
pub use shape::{filter_by_genre, shape};
pub use types::{Movie, MoviePage, RatingBand, OVERVIEW_EXCERPT_LEN};

/// Source of movie listings.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Page `page` of the popular feed, at most `limit` movies.
    async fn popular(&self, page: u32, limit: usize) -> Result<MoviePage, TmdbError>;

    /// Free-text title search.
    async fn search_by_name(
        &self,
        query: &str,
        page: u32,
        limit: usize,
    ) -> Result<MoviePage, TmdbError>;

    /// Server-side discovery filtered by one genre.
    async fn search_by_genre(
        &self,
        genre_id: u32,
        page: u32,
        limit: usize,
    ) -> Result<MoviePage, TmdbError>;

    /// Title search filtered locally by genre. The page count is the
    /// unfiltered search's.
    async fn search_by_name_and_genre(
        &self,
        query: &str,
        genre_id: u32,
        page: u32,
        limit: usize,
    ) -> Result<MoviePage, TmdbError>;
}

/// Exchanges user credentials for a session identifier.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str) -> Result<String, TmdbError>;
}
