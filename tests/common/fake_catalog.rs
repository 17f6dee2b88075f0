//! Scripted in-process catalogue for driving the browse controller.

#![allow(dead_code)]

use async_trait::async_trait;
use cinescope::tmdb::{Movie, MovieCatalog, MoviePage, TmdbError};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Notify;

/// One recorded catalogue call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub operation: &'static str,
    pub query: Option<String>,
    pub genre: Option<u32>,
    pub page: u32,
    pub limit: usize,
}

/// Replies with queued results and records every call.
///
/// With [`FakeCatalog::gated`] each call waits for [`FakeCatalog::release`]
/// so tests can observe a fetch while it is in flight.
#[derive(Default)]
pub struct FakeCatalog {
    replies: Mutex<VecDeque<Result<MoviePage, TmdbError>>>,
    calls: Mutex<Vec<Call>>,
    gate: Option<Gate>,
}

struct Gate {
    entered: Notify,
    release: Notify,
}

impl FakeCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn gated() -> Arc<Self> {
        Arc::new(Self {
            gate: Some(Gate {
                entered: Notify::new(),
                release: Notify::new(),
            }),
            ..Self::default()
        })
    }

    pub fn reply(&self, reply: Result<MoviePage, TmdbError>) {
        self.replies.lock().push_back(reply);
    }

    pub fn reply_movies(&self, movies: Vec<Movie>, total_pages: u32) {
        self.reply(Ok(MoviePage {
            results: movies,
            total_pages,
        }));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Wait until a gated call has started.
    pub async fn wait_entered(&self) {
        if let Some(gate) = &self.gate {
            gate.entered.notified().await;
        }
    }

    /// Let one gated call finish.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.release.notify_one();
        }
    }

    async fn record(&self, call: Call) -> Result<MoviePage, TmdbError> {
        self.calls.lock().push(call);
        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(MoviePage {
                results: Vec::new(),
                total_pages: 1,
            }))
    }
}

#[async_trait]
impl MovieCatalog for FakeCatalog {
    async fn popular(&self, page: u32, limit: usize) -> Result<MoviePage, TmdbError> {
        self.record(Call {
            operation: "popular",
            query: None,
            genre: None,
            page,
            limit,
        })
        .await
    }

    async fn search_by_name(
        &self,
        query: &str,
        page: u32,
        limit: usize,
    ) -> Result<MoviePage, TmdbError> {
        self.record(Call {
            operation: "search_by_name",
            query: Some(query.to_string()),
            genre: None,
            page,
            limit,
        })
        .await
    }

    async fn search_by_genre(
        &self,
        genre_id: u32,
        page: u32,
        limit: usize,
    ) -> Result<MoviePage, TmdbError> {
        self.record(Call {
            operation: "search_by_genre",
            query: None,
            genre: Some(genre_id),
            page,
            limit,
        })
        .await
    }

    async fn search_by_name_and_genre(
        &self,
        query: &str,
        genre_id: u32,
        page: u32,
        limit: usize,
    ) -> Result<MoviePage, TmdbError> {
        self.record(Call {
            operation: "search_by_name_and_genre",
            query: Some(query.to_string()),
            genre: Some(genre_id),
            page,
            limit,
        })
        .await
    }
}

pub fn movie(id: u64, title: &str, vote: Option<f64>) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: format!("About {}", title),
        release_date: Some("2021-05-05".to_string()),
        poster_path: None,
        vote_average: vote,
        genre_ids: Some(vec![18]),
    }
}

/// `count` movies rated 5.0.
pub fn movies(count: u64) -> Vec<Movie> {
    (1..=count)
        .map(|id| movie(id, &format!("Movie {}", id), Some(5.0)))
        .collect()
}
