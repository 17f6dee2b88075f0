//! Shared in-memory favorites set.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::tmdb::Movie;

use super::Favorites;

/// Thread-safe favorites set keyed by movie id.
///
/// Cloning yields another handle to the same set, so one instance built at
/// startup can be handed to every view.
#[derive(Clone, Default)]
pub struct FavoritesStore {
    inner: Arc<RwLock<Vec<Movie>>>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the favorites in insertion order.
    pub fn list(&self) -> Vec<Movie> {
        self.inner.read().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl Favorites for FavoritesStore {
    fn is_favorite(&self, id: u64) -> bool {
        self.inner.read().iter().any(|m| m.id == id)
    }

    fn add(&self, movie: Movie) {
        let mut favorites = self.inner.write();
        if favorites.iter().any(|m| m.id == movie.id) {
            return;
        }
        tracing::debug!(id = movie.id, title = %movie.title, "Added to favorites");
        favorites.push(movie);
    }

    fn remove(&self, id: u64) {
        let mut favorites = self.inner.write();
        let before = favorites.len();
        favorites.retain(|m| m.id != id);
        if favorites.len() != before {
            tracing::debug!(id, "Removed from favorites");
        }
    }
}
