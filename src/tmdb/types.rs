//! Movie entity and wire payloads.

use serde::{Deserialize, Serialize};

use crate::config::ImageConfig;

/// Characters of the overview shown in a card.
pub const OVERVIEW_EXCERPT_LEN: usize = 80;

/// A movie as returned by the remote catalogue. Never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub genre_ids: Option<Vec<u32>>,
}

/// Colour band of the user-score bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    Green,
    Yellow,
    Orange,
    Red,
}

impl RatingBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

impl Movie {
    /// User score on the 0-10 scale; absent scores count as 0.
    pub fn rating(&self) -> f64 {
        self.vote_average.unwrap_or(0.0)
    }

    pub fn rating_percent(&self) -> f64 {
        self.rating() / 10.0 * 100.0
    }

    pub fn rating_band(&self) -> RatingBand {
        let rating = self.rating();
        if rating >= 7.45 {
            RatingBand::Green
        } else if rating >= 5.0 {
            RatingBand::Yellow
        } else if rating >= 2.4 {
            RatingBand::Orange
        } else {
            RatingBand::Red
        }
    }

    pub fn has_genre(&self, genre_id: u32) -> bool {
        self.genre_ids
            .as_ref()
            .is_some_and(|ids| ids.contains(&genre_id))
    }

    /// Poster URL, or the placeholder when the movie has none.
    pub fn poster_url(&self, images: &ImageConfig) -> String {
        match self.poster_path.as_deref().filter(|p| !p.is_empty()) {
            Some(path) => format!("{}{}", images.poster_base_url, path),
            None => images.placeholder_url.clone(),
        }
    }

    /// Public detail page on the catalogue website.
    pub fn page_url(&self, images: &ImageConfig) -> String {
        format!("{}/{}", images.movie_page_base_url, self.id)
    }

    pub fn release_date_or_na(&self) -> &str {
        self.release_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("N/A")
    }

    /// First [`OVERVIEW_EXCERPT_LEN`] characters followed by an ellipsis.
    pub fn overview_excerpt(&self) -> String {
        if self.overview.is_empty() {
            return "No description available.".to_string();
        }
        let head: String = self.overview.chars().take(OVERVIEW_EXCERPT_LEN).collect();
        format!("{}...", head)
    }
}

/// One page of shaped results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoviePage {
    pub results: Vec<Movie>,
    /// Page count reported by the service, at least 1.
    pub total_pages: u32,
}

/// Raw listing body shared by popular, search and discover.
#[derive(Debug, Deserialize)]
pub(crate) struct ListingResponse {
    #[serde(default)]
    pub results: Option<Vec<Movie>>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RequestTokenResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub request_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ValidateWithLogin<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub request_token: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewSession<'a> {
    pub request_token: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(vote: Option<f64>) -> Movie {
        Movie {
            id: 42,
            title: "Dune".to_string(),
            overview: String::new(),
            release_date: None,
            poster_path: None,
            vote_average: vote,
            genre_ids: None,
        }
    }

    #[test]
    fn deserializes_sparse_movie() {
        let movie: Movie = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(movie.id, 7);
        assert!(movie.title.is_empty());
        assert!(movie.genre_ids.is_none());
        assert_eq!(movie.rating(), 0.0);
    }

    #[test]
    fn rating_band_thresholds() {
        assert_eq!(movie(Some(7.45)).rating_band(), RatingBand::Green);
        assert_eq!(movie(Some(7.44)).rating_band(), RatingBand::Yellow);
        assert_eq!(movie(Some(5.0)).rating_band(), RatingBand::Yellow);
        assert_eq!(movie(Some(2.4)).rating_band(), RatingBand::Orange);
        assert_eq!(movie(Some(2.39)).rating_band(), RatingBand::Red);
        assert_eq!(movie(None).rating_band(), RatingBand::Red);
    }

    #[test]
    fn poster_falls_back_to_placeholder() {
        let images = ImageConfig::default();
        let mut m = movie(None);
        assert_eq!(m.poster_url(&images), images.placeholder_url);

        m.poster_path = Some("/abc.jpg".to_string());
        assert_eq!(m.poster_url(&images), "https://image.tmdb.org/t/p/w500/abc.jpg");
        assert_eq!(m.page_url(&images), "https://www.themoviedb.org/movie/42");
    }

    #[test]
    fn overview_excerpt_truncates() {
        let mut m = movie(None);
        assert_eq!(m.overview_excerpt(), "No description available.");

        m.overview = "x".repeat(100);
        let excerpt = m.overview_excerpt();
        assert_eq!(excerpt.len(), OVERVIEW_EXCERPT_LEN + 3);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn release_date_defaults_to_na() {
        let mut m = movie(None);
        assert_eq!(m.release_date_or_na(), "N/A");
        m.release_date = Some("2021-10-22".to_string());
        assert_eq!(m.release_date_or_na(), "2021-10-22");
    }
}
