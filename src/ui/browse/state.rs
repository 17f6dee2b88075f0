//! State for the browse view.

use crate::tmdb::Movie;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowsePhase {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// Exactly one fetch is in flight.
    Loading,
    /// Last fetch returned at least one movie.
    Loaded,
    /// Last fetch returned no movies.
    Empty,
    /// Last fetch failed.
    Failed,
}

/// Filters, cursor and results of the browse view.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    /// Raw text as typed; trimmed when a fetch is dispatched.
    pub query: String,
    pub genre: Option<u32>,
    /// 1-based, never above `total_pages`.
    pub page: u32,
    pub total_pages: u32,
    pub results: Vec<Movie>,
    pub phase: BrowsePhase,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            query: String::new(),
            genre: None,
            page: 1,
            total_pages: 1,
            results: Vec::new(),
            phase: BrowsePhase::Idle,
        }
    }
}

impl UiState for BrowseState {}

impl BrowseState {
    pub fn is_loading(&self) -> bool {
        self.phase == BrowsePhase::Loading
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_loading() && self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_loading() && self.page < self.total_pages
    }
}
