//! Drives the browse view: runs catalogue fetches and feeds their outcome
//! through [`BrowseReducer`].

use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::BrowseConfig;
use crate::tmdb::{MovieCatalog, MoviePage, TmdbError, TmdbErrorKind};
use crate::ui::mvi::Reducer;
use crate::ui::notifications::{NotificationCenter, NotificationKind};

use super::dispatch::{
    failure_message, found_message, query_too_short_message, recommendation_message,
    recommended, CatalogRequest, EMPTY_RESULTS_MESSAGE,
};
use super::intent::BrowseIntent;
use super::reducer::BrowseReducer;
use super::state::BrowseState;

/// What a fetch request turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Another fetch was in flight; nothing was sent.
    Skipped,
    /// Navigation past the first or last page; nothing was sent.
    NoOp,
    /// Submission rejected before any request.
    Rejected,
    /// The view was unmounted while the request was in flight.
    Discarded,
    Loaded { count: usize },
    Empty,
    Failed(TmdbErrorKind),
}

impl FetchOutcome {
    /// True if a request was sent to the catalogue.
    pub fn hit_network(&self) -> bool {
        matches!(
            self,
            Self::Discarded | Self::Loaded { .. } | Self::Empty | Self::Failed(_)
        )
    }
}

/// Browse/search orchestrator.
///
/// At most one fetch runs at a time; requests arriving while one is in
/// flight are dropped. All methods take `&self`, so the controller can be
/// shared behind an `Arc` between input handling and rendering.
pub struct BrowseController<C: MovieCatalog + ?Sized> {
    catalog: Arc<C>,
    notifications: NotificationCenter,
    settings: RwLock<BrowseConfig>,
    state: Mutex<BrowseState>,
    /// Bumped on unmount so late responses can be recognised. Only read or
    /// written while `state` is locked.
    epoch: AtomicU64,
}

impl<C: MovieCatalog + ?Sized> BrowseController<C> {
    pub fn new(catalog: Arc<C>, notifications: NotificationCenter, settings: BrowseConfig) -> Self {
        Self {
            catalog,
            notifications,
            settings: RwLock::new(settings),
            state: Mutex::new(BrowseState::default()),
            epoch: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> BrowseState {
        self.state.lock().clone()
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn settings(&self) -> BrowseConfig {
        self.settings.read().clone()
    }

    /// Swap in new browse settings. A fetch already in flight finishes with
    /// the old ones.
    pub fn apply_settings(&self, settings: BrowseConfig) {
        self.notifications
            .set_ttl(Duration::from_millis(settings.notification_ttl_ms));
        tracing::debug!(
            page_size = settings.page_size,
            max_pages = settings.max_pages,
            "Browse settings updated"
        );
        *self.settings.write() = settings;
    }

    fn dispatch(&self, intent: BrowseIntent) {
        let mut state = self.state.lock();
        *state = BrowseReducer::reduce(std::mem::take(&mut *state), intent);
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.dispatch(BrowseIntent::QueryChanged(query.into()));
    }

    pub fn set_genre(&self, genre: Option<u32>) {
        self.dispatch(BrowseIntent::GenreChanged(genre));
    }

    /// Initial load for the current page and filters.
    pub async fn mount(&self) -> FetchOutcome {
        let page = self.state.lock().page;
        tracing::debug!(page, "Browse view mounted");
        self.fetch(page).await
    }

    /// Reset state and notifications. Responses still in flight are dropped.
    pub fn unmount(&self) {
        let mut state = self.state.lock();
        self.epoch.fetch_add(1, Ordering::SeqCst);
        *state = BrowseReducer::reduce(std::mem::take(&mut *state), BrowseIntent::Reset);
        self.notifications.clear();
        tracing::debug!("Browse view unmounted");
    }

    /// Apply the current query and genre, starting again from page 1.
    pub async fn submit(&self) -> FetchOutcome {
        self.submit_page(1).await
    }

    /// Like [`submit`](Self::submit) but lands on `page`.
    pub async fn submit_page(&self, page: u32) -> FetchOutcome {
        let query_len = {
            let state = self.state.lock();
            if state.is_loading() {
                tracing::debug!("Search skipped: already loading");
                return FetchOutcome::Skipped;
            }
            state.query.trim().chars().count()
        };

        let min_query_len = self.settings.read().min_query_len;
        if query_len > 0 && query_len < min_query_len {
            tracing::debug!(query_len, "Search rejected: query too short");
            self.notifications.push(
                query_too_short_message(min_query_len),
                NotificationKind::Error,
            );
            return FetchOutcome::Rejected;
        }

        self.fetch(page).await
    }

    pub async fn next_page(&self) -> FetchOutcome {
        let target = {
            let state = self.state.lock();
            if !state.can_go_next() {
                return FetchOutcome::NoOp;
            }
            state.page + 1
        };
        tracing::debug!(page = target, "Navigating to next page");
        self.fetch(target).await
    }

    pub async fn previous_page(&self) -> FetchOutcome {
        let target = {
            let state = self.state.lock();
            if !state.can_go_previous() {
                return FetchOutcome::NoOp;
            }
            state.page - 1
        };
        tracing::debug!(page = target, "Navigating to previous page");
        self.fetch(target).await
    }

    /// Fetch `page` with the current filters unless a fetch is in flight.
    ///
    /// `page` is clamped to `1..=max_pages` before anything is sent.
    pub async fn fetch(&self, page: u32) -> FetchOutcome {
        let settings = self.settings();
        let page = page.clamp(1, settings.max_pages.max(1));
        let (epoch, request) = {
            let mut state = self.state.lock();
            if state.is_loading() {
                tracing::debug!(page, "Fetch skipped: already loading");
                return FetchOutcome::Skipped;
            }
            *state = BrowseReducer::reduce(
                std::mem::take(&mut *state),
                BrowseIntent::FetchStarted { page },
            );
            (
                self.epoch.load(Ordering::SeqCst),
                CatalogRequest::select(&state.query, state.genre),
            )
        };

        tracing::info!(operation = request.label(), page, "Fetching movies");
        let result = self.execute(&request, page, settings.page_size).await;

        let mut state = self.state.lock();
        if self.epoch.load(Ordering::SeqCst) != epoch {
            tracing::debug!(page, "Discarding response for unmounted view");
            return FetchOutcome::Discarded;
        }

        match result {
            Ok(MoviePage {
                results,
                total_pages,
            }) => {
                let count = results.len();
                let recommendation = recommended(&results).map(recommendation_message);
                *state = BrowseReducer::reduce(
                    std::mem::take(&mut *state),
                    BrowseIntent::FetchSucceeded {
                        results,
                        total_pages,
                        max_pages: settings.max_pages,
                    },
                );

                if count == 0 {
                    self.notifications
                        .push(EMPTY_RESULTS_MESSAGE, NotificationKind::Info);
                    return FetchOutcome::Empty;
                }

                tracing::info!(count, page, total_pages, "Movies loaded");
                self.notifications
                    .push(found_message(count, state.page), NotificationKind::Success);
                if let Some(message) = recommendation {
                    self.notifications
                        .push(message, NotificationKind::Recommendation);
                }
                FetchOutcome::Loaded { count }
            }
            Err(err) => {
                tracing::warn!(
                    operation = request.label(),
                    page,
                    error_type = err.error_type(),
                    error = %err,
                    "Fetch failed"
                );
                *state = BrowseReducer::reduce(std::mem::take(&mut *state), BrowseIntent::FetchFailed);
                self.notifications
                    .push(failure_message(&err), NotificationKind::Error);
                FetchOutcome::Failed(err.kind())
            }
        }
    }

    async fn execute(
        &self,
        request: &CatalogRequest,
        page: u32,
        limit: usize,
    ) -> Result<MoviePage, TmdbError> {
        match request {
            CatalogRequest::Popular => self.catalog.popular(page, limit).await,
            CatalogRequest::ByName { query } => {
                self.catalog.search_by_name(query, page, limit).await
            }
            CatalogRequest::ByGenre { genre_id } => {
                self.catalog.search_by_genre(*genre_id, page, limit).await
            }
            CatalogRequest::ByNameAndGenre { query, genre_id } => {
                self.catalog
                    .search_by_name_and_genre(query, *genre_id, page, limit)
                    .await
            }
        }
    }
}
