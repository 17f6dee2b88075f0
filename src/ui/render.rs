//! Plain-text rendering of movie cards, pagination and notifications.

use std::fmt::Write as _;

use crate::config::ImageConfig;
use crate::favorites::Favorites;
use crate::tmdb::{genre_name, Movie, GENRES};
use crate::ui::browse::{BrowsePhase, BrowseState};
use crate::ui::notifications::Notification;

pub const LOADING_TEXT: &str = "Loading movies...";

/// Multi-line card for one movie.
pub fn movie_card(movie: &Movie, images: &ImageConfig, is_favorite: bool) -> String {
    let marker = if is_favorite { "♥" } else { "♡" };
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}] {}", marker, movie.id, movie.title);
    let _ = writeln!(
        out,
        "    Released: {}   User Score: {:.1}/10 ({:.0}%, {})",
        movie.release_date_or_na(),
        movie.rating(),
        movie.rating_percent(),
        movie.rating_band().label()
    );
    if let Some(genres) = genre_names(movie) {
        let _ = writeln!(out, "    Genres: {}", genres);
    }
    let _ = writeln!(out, "    {}", movie.overview_excerpt());
    let _ = writeln!(out, "    Poster: {}", movie.poster_url(images));
    let _ = writeln!(out, "    More: {}", movie.page_url(images));
    out
}

/// Names of the offered genres this movie belongs to.
fn genre_names(movie: &Movie) -> Option<String> {
    let names: Vec<&str> = movie
        .genre_ids
        .as_deref()?
        .iter()
        .filter_map(|&id| genre_name(id))
        .collect();
    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

/// "Page X of Y" with the navigation that is currently possible.
pub fn pager(state: &BrowseState) -> String {
    let prev = if state.can_go_previous() { "[p]rev" } else { "" };
    let next = if state.can_go_next() { "[n]ext" } else { "" };
    let nav = [prev, next]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if nav.is_empty() {
        format!("Page {} of {}", state.page, state.total_pages)
    } else {
        format!("Page {} of {}  {}", state.page, state.total_pages, nav)
    }
}

/// Full browse view: filters, results and pager.
pub fn browse_view(state: &BrowseState, images: &ImageConfig, favorites: &dyn Favorites) -> String {
    let mut out = String::new();
    let genre = state
        .genre
        .and_then(genre_name)
        .unwrap_or("Popular");
    let query = state.query.trim();
    if query.is_empty() {
        let _ = writeln!(out, "Genre: {}", genre);
    } else {
        let _ = writeln!(out, "Search: \"{}\"   Genre: {}", query, genre);
    }

    match state.phase {
        BrowsePhase::Loading => {
            let _ = writeln!(out, "{}", LOADING_TEXT);
        }
        BrowsePhase::Idle | BrowsePhase::Empty | BrowsePhase::Failed => {}
        BrowsePhase::Loaded => {
            for movie in &state.results {
                out.push_str(&movie_card(movie, images, favorites.is_favorite(movie.id)));
            }
        }
    }
    let _ = writeln!(out, "{}", pager(state));
    out
}

pub fn notification_line(notification: &Notification) -> String {
    format!(
        "({}) [{}] {}",
        notification.id,
        notification.kind.label(),
        notification.message
    )
}

/// Genre choices as `id  name` rows.
pub fn genre_table() -> String {
    let mut out = String::new();
    for genre in GENRES {
        let id = genre
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "{:>4}  {}", id, genre.name);
    }
    out
}
