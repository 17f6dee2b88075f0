//! Intents for the browse view.

use crate::tmdb::Movie;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BrowseIntent {
    /// Search text edited. Does not fetch by itself.
    QueryChanged(String),

    /// Genre filter changed. Does not fetch by itself.
    GenreChanged(Option<u32>),

    /// A fetch for `page` is starting. Ignored while another is in flight.
    FetchStarted { page: u32 },

    /// The in-flight fetch returned.
    FetchSucceeded {
        results: Vec<Movie>,
        total_pages: u32,
        /// Cap applied to `total_pages`.
        max_pages: u32,
    },

    /// The in-flight fetch failed.
    FetchFailed,

    /// View unmounted.
    Reset,
}

impl Intent for BrowseIntent {}
