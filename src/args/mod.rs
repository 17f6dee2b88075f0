//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "cinescope")]
#[command(about = "Browse, search and log in to The Movie Database", long_about = None)]
pub struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Interactive browse shell
    Browse,

    /// List popular movies
    Popular {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Search movies by title, optionally within a genre
    Search {
        query: String,

        /// Genre id or name, e.g. 28 or "action"
        #[arg(long)]
        genre: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// List selectable genres
    Genres,

    /// Log in with a TMDB account; the password is read from stdin
    Login {
        #[arg(long)]
        username: String,
    },

    /// Forget the stored session
    Logout,

    /// Show whether a session is stored
    Whoami,
}
