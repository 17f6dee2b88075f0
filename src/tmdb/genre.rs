//! Selectable genre filters.

/// A genre choice. `id == None` is the unfiltered popular feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genre {
    pub id: Option<u32>,
    pub name: &'static str,
}

/// Genres offered by the browse view, in display order.
pub const GENRES: &[Genre] = &[
    Genre { id: None, name: "Popular" },
    Genre { id: Some(28), name: "Action" },
    Genre { id: Some(12), name: "Adventure" },
    Genre { id: Some(16), name: "Animation" },
    Genre { id: Some(35), name: "Comedy" },
    Genre { id: Some(18), name: "Drama" },
    Genre { id: Some(27), name: "Horror" },
    Genre { id: Some(878), name: "Science Fiction" },
    Genre { id: Some(37), name: "Western" },
];

/// Look up a genre by numeric id or case-insensitive name.
pub fn find_genre(input: &str) -> Option<Genre> {
    let input = input.trim();
    if let Ok(id) = input.parse::<u32>() {
        return GENRES.iter().copied().find(|g| g.id == Some(id));
    }
    GENRES
        .iter()
        .copied()
        .find(|g| g.name.eq_ignore_ascii_case(input))
}

/// Display name for a genre id, if it is one of the offered genres.
pub fn genre_name(id: u32) -> Option<&'static str> {
    GENRES.iter().find(|g| g.id == Some(id)).map(|g| g.name)
}
