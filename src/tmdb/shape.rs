//! Response shaping: truncate, filter, shuffle.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::Movie;

/// Keep the first `limit` movies and shuffle them uniformly.
pub fn shape<R: Rng + ?Sized>(mut raw: Vec<Movie>, limit: usize, rng: &mut R) -> Vec<Movie> {
    raw.truncate(limit);
    // Fisher–Yates
    raw.shuffle(rng);
    raw
}

/// Keep only movies tagged with `genre_id`, preserving order.
pub fn filter_by_genre(raw: Vec<Movie>, genre_id: u32) -> Vec<Movie> {
    raw.into_iter().filter(|m| m.has_genre(genre_id)).collect()
}
