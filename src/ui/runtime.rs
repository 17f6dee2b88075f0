//! Line-oriented interactive browse shell.

use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::config::ConfigStore;
use crate::favorites::{Favorites, FavoritesStore};
use crate::tmdb::{find_genre, MovieCatalog};
use crate::ui::browse::BrowseController;
use crate::ui::render;

pub const HELP: &str = "\
Commands:
  search <text>   search by title from page 1
  query <text>    edit the search text without searching
  genre <g>       set the genre filter (id, name or 'none')
  go              run the current search
  n | next        next page
  p | prev        previous page
  fav <id>        toggle a listed movie as favorite
  favs            list favorites
  notes           show notifications
  dismiss <id>    dismiss a notification
  clear           dismiss all notifications
  genres          list genres
  reload          re-read the configuration file
  help            show this help
  q | quit        leave";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Query(String),
    Genre(Option<u32>),
    Go,
    Next,
    Previous,
    ToggleFavorite(u64),
    Favorites,
    Notes,
    Dismiss(u64),
    Clear,
    Genres,
    Reload,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "search" | "s" => ShellCommand::Search(rest.to_string()),
        "query" => ShellCommand::Query(rest.to_string()),
        "genre" | "g" => {
            if rest.is_empty() || rest.eq_ignore_ascii_case("none") {
                ShellCommand::Genre(None)
            } else {
                let genre = find_genre(rest).ok_or_else(|| format!("Unknown genre '{}'", rest))?;
                ShellCommand::Genre(genre.id)
            }
        }
        "go" => ShellCommand::Go,
        "n" | "next" => ShellCommand::Next,
        "p" | "prev" => ShellCommand::Previous,
        "fav" => ShellCommand::ToggleFavorite(parse_id(rest)?),
        "favs" => ShellCommand::Favorites,
        "notes" => ShellCommand::Notes,
        "dismiss" => ShellCommand::Dismiss(parse_id(rest)?),
        "clear" => ShellCommand::Clear,
        "genres" => ShellCommand::Genres,
        "reload" => ShellCommand::Reload,
        "help" | "?" => ShellCommand::Help,
        "q" | "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
    };
    Ok(Some(command))
}

fn parse_id(input: &str) -> Result<u64, String> {
    input
        .parse::<u64>()
        .map_err(|_| format!("Expected a numeric id, got '{}'", input))
}

/// Interactive browse session over a catalogue.
pub struct BrowseShell<C: MovieCatalog + ?Sized> {
    controller: Arc<BrowseController<C>>,
    favorites: FavoritesStore,
    config: ConfigStore,
}

impl<C: MovieCatalog + ?Sized> BrowseShell<C> {
    pub fn new(
        controller: Arc<BrowseController<C>>,
        favorites: FavoritesStore,
        config: ConfigStore,
    ) -> Self {
        Self {
            controller,
            favorites,
            config,
        }
    }

    /// Mount, then read commands until `quit` or end of input.
    pub async fn run<R, W>(&self, input: R, out: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        self.controller.mount().await;
        self.render(out)?;

        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            match parse_command(&line) {
                Ok(None) => continue,
                Ok(Some(ShellCommand::Quit)) => break,
                Ok(Some(command)) => self.execute(command, out).await?,
                Err(message) => writeln!(out, "{}", message)?,
            }
        }

        self.controller.unmount();
        Ok(())
    }

    async fn execute<W: Write>(&self, command: ShellCommand, out: &mut W) -> std::io::Result<()> {
        match command {
            ShellCommand::Search(text) => {
                self.controller.set_query(text);
                self.controller.submit().await;
                self.render(out)?;
            }
            ShellCommand::Query(text) => self.controller.set_query(text),
            ShellCommand::Genre(genre) => self.controller.set_genre(genre),
            ShellCommand::Go => {
                self.controller.submit().await;
                self.render(out)?;
            }
            ShellCommand::Next => {
                self.controller.next_page().await;
                self.render(out)?;
            }
            ShellCommand::Previous => {
                self.controller.previous_page().await;
                self.render(out)?;
            }
            ShellCommand::ToggleFavorite(id) => {
                let state = self.controller.state();
                match state.results.into_iter().find(|m| m.id == id) {
                    Some(movie) => {
                        let title = movie.title.clone();
                        let added = self.favorites.toggle(movie);
                        let verb = if added { "Added to" } else { "Removed from" };
                        writeln!(out, "{} favorites: {}", verb, title)?;
                    }
                    None if self.favorites.is_favorite(id) => {
                        self.favorites.remove(id);
                        writeln!(out, "Removed from favorites: {}", id)?;
                    }
                    None => writeln!(out, "Movie {} is not on this page", id)?,
                }
            }
            ShellCommand::Favorites => {
                let favorites = self.favorites.list();
                if favorites.is_empty() {
                    writeln!(out, "No favorites yet.")?;
                }
                let images = self.config.get().images;
                for movie in &favorites {
                    write!(out, "{}", render::movie_card(movie, &images, true))?;
                }
            }
            ShellCommand::Notes => self.render_notifications(out)?,
            ShellCommand::Dismiss(id) => {
                if !self.controller.notifications().dismiss(id) {
                    writeln!(out, "No notification {}", id)?;
                }
            }
            ShellCommand::Clear => self.controller.notifications().clear(),
            ShellCommand::Genres => write!(out, "{}", render::genre_table())?,
            ShellCommand::Reload => match self.config.reload() {
                Ok(()) => {
                    self.controller.apply_settings(self.config.get().browse);
                    writeln!(out, "Reloaded {}", self.config.path().display())?;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Config reload failed");
                    writeln!(out, "Reload failed, keeping current settings: {}", err)?;
                }
            },
            ShellCommand::Help => writeln!(out, "{}", HELP)?,
            ShellCommand::Quit => {}
        }
        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let state = self.controller.state();
        let images = self.config.get().images;
        write!(out, "{}", render::browse_view(&state, &images, &self.favorites))?;
        self.render_notifications(out)
    }

    fn render_notifications<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for notification in self.controller.notifications().visible() {
            writeln!(out, "{}", render::notification_line(&notification))?;
        }
        Ok(())
    }
}
