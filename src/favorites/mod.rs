//! Favorites shared across views.
//!
//! Consumers depend on the [`Favorites`] capability rather than a global,
//! and receive a [`FavoritesStore`] handle at construction.

mod store;

pub use store::FavoritesStore;

use crate::tmdb::Movie;

/// Read/write access to the favorites set.
pub trait Favorites: Send + Sync {
    fn is_favorite(&self, id: u64) -> bool;

    /// No-op if a movie with the same id is already present.
    fn add(&self, movie: Movie);

    /// No-op if absent.
    fn remove(&self, id: u64);

    /// Flip membership. Returns `true` if the movie is now a favorite.
    fn toggle(&self, movie: Movie) -> bool {
        if self.is_favorite(movie.id) {
            self.remove(movie.id);
            false
        } else {
            self.add(movie);
            true
        }
    }
}
