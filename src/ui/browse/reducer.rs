//! Reducer for the browse view.

use crate::ui::mvi::Reducer;

use super::intent::BrowseIntent;
use super::state::{BrowsePhase, BrowseState};

pub struct BrowseReducer;

impl Reducer for BrowseReducer {
    type State = BrowseState;
    type Intent = BrowseIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowseIntent::QueryChanged(query) => BrowseState { query, ..state },

            BrowseIntent::GenreChanged(genre) => BrowseState {
                genre: genre.filter(|&g| g != 0),
                ..state
            },

            BrowseIntent::FetchStarted { page } => {
                if state.is_loading() {
                    // Drop, not queue.
                    return state;
                }
                BrowseState {
                    page: page.max(1),
                    phase: BrowsePhase::Loading,
                    ..state
                }
            }

            BrowseIntent::FetchSucceeded {
                results,
                total_pages,
                max_pages,
            } => {
                if !state.is_loading() {
                    return state;
                }
                if results.is_empty() {
                    settle(state, BrowsePhase::Empty)
                } else {
                    let total_pages = total_pages.min(max_pages).max(1);
                    BrowseState {
                        page: state.page.min(total_pages),
                        total_pages,
                        results,
                        phase: BrowsePhase::Loaded,
                        ..state
                    }
                }
            }

            BrowseIntent::FetchFailed => {
                if !state.is_loading() {
                    return state;
                }
                settle(state, BrowsePhase::Failed)
            }

            BrowseIntent::Reset => BrowseState::default(),
        }
    }
}

/// Clear results and collapse to a single page.
fn settle(state: BrowseState, phase: BrowsePhase) -> BrowseState {
    BrowseState {
        page: 1,
        total_pages: 1,
        results: Vec::new(),
        phase,
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmdb::Movie;

    fn movie(id: u64) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            overview: String::new(),
            release_date: None,
            poster_path: None,
            vote_average: None,
            genre_ids: None,
        }
    }

    fn loading(page: u32) -> BrowseState {
        BrowseReducer::reduce(BrowseState::default(), BrowseIntent::FetchStarted { page })
    }

    #[test]
    fn fetch_started_enters_loading() {
        let state = loading(3);
        assert_eq!(state.phase, BrowsePhase::Loading);
        assert_eq!(state.page, 3);
    }

    #[test]
    fn fetch_started_while_loading_is_dropped() {
        let state = loading(2);
        let next = BrowseReducer::reduce(state.clone(), BrowseIntent::FetchStarted { page: 4 });
        assert_eq!(next, state);
    }

    #[test]
    fn success_caps_total_pages() {
        let state = BrowseReducer::reduce(
            loading(1),
            BrowseIntent::FetchSucceeded {
                results: vec![movie(1), movie(2)],
                total_pages: 500,
                max_pages: 20,
            },
        );
        assert_eq!(state.phase, BrowsePhase::Loaded);
        assert_eq!(state.total_pages, 20);
        assert_eq!(state.results.len(), 2);
    }

    #[test]
    fn empty_result_resets_paging() {
        let state = BrowseReducer::reduce(
            loading(4),
            BrowseIntent::FetchSucceeded {
                results: Vec::new(),
                total_pages: 9,
                max_pages: 20,
            },
        );
        assert_eq!(state.phase, BrowsePhase::Empty);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page, 1);
        assert!(state.results.is_empty());
    }

    #[test]
    fn failure_clears_results() {
        let mut state = loading(1);
        state.results = vec![movie(1)];
        state.total_pages = 7;
        let state = BrowseReducer::reduce(state, BrowseIntent::FetchFailed);
        assert_eq!(state.phase, BrowsePhase::Failed);
        assert!(state.results.is_empty());
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn outcome_without_fetch_is_ignored() {
        let state = BrowseState::default();
        let next = BrowseReducer::reduce(state.clone(), BrowseIntent::FetchFailed);
        assert_eq!(next, state);
    }

    #[test]
    fn filters_edit_without_fetching() {
        let state = BrowseReducer::reduce(
            BrowseState::default(),
            BrowseIntent::QueryChanged("dune".into()),
        );
        let state = BrowseReducer::reduce(state, BrowseIntent::GenreChanged(Some(878)));
        assert_eq!(state.query, "dune");
        assert_eq!(state.genre, Some(878));
        assert_eq!(state.phase, BrowsePhase::Idle);

        let state = BrowseReducer::reduce(state, BrowseIntent::GenreChanged(Some(0)));
        assert_eq!(state.genre, None);
    }

    #[test]
    fn reset_restores_default() {
        let state = BrowseReducer::reduce(loading(3), BrowseIntent::Reset);
        assert_eq!(state, BrowseState::default());
    }
}
