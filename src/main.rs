use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use cinescope::args::{Cli, Command};
use cinescope::config::{Config, ConfigStore};
use cinescope::favorites::FavoritesStore;
use cinescope::logging::init_tracing;
use cinescope::session::{FileStorage, LoginFlow, SessionStore};
use cinescope::tmdb::{find_genre, TmdbClient};
use cinescope::ui::browse::{BrowseController, FetchOutcome};
use cinescope::ui::notifications::NotificationCenter;
use cinescope::ui::render;
use cinescope::ui::runtime::BrowseShell;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let store = ConfigStore::open(path).context("Failed to load configuration")?;
    let config = store.get();
    tracing::debug!(path = %store.path().display(), "Configuration loaded");

    match cli.command {
        Command::Browse => browse(store).await,
        Command::Popular { page } => one_shot(&config, "", None, page).await,
        Command::Search { query, genre, page } => {
            let genre = match genre {
                Some(input) => match find_genre(&input) {
                    Some(genre) => genre.id,
                    None => bail!("Unknown genre '{}'. Run `cinescope genres` to list them.", input),
                },
                None => None,
            };
            one_shot(&config, &query, genre, page).await
        }
        Command::Genres => {
            print!("{}", render::genre_table());
            Ok(())
        }
        Command::Login { username } => login(&config, &username).await,
        Command::Logout => {
            session_store(&config)
                .logout()
                .context("Failed to clear session")?;
            println!("Logged out.");
            Ok(())
        }
        Command::Whoami => {
            if session_store(&config).is_authenticated() {
                println!("Logged in.");
            } else {
                println!("Not logged in.");
            }
            Ok(())
        }
    }
}

fn session_store(config: &Config) -> SessionStore {
    SessionStore::new(Arc::new(FileStorage::from_config(&config.session)))
}

fn build_controller(config: &Config) -> Result<BrowseController<TmdbClient>> {
    let client = TmdbClient::from_config(&config.api).context("Failed to build API client")?;
    let notifications =
        NotificationCenter::new(Duration::from_millis(config.browse.notification_ttl_ms));
    Ok(BrowseController::new(
        Arc::new(client),
        notifications,
        config.browse.clone(),
    ))
}

async fn browse(store: ConfigStore) -> Result<()> {
    let shell = BrowseShell::new(
        Arc::new(build_controller(&store.get())?),
        FavoritesStore::new(),
        store,
    );
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    shell.run(stdin, &mut stdout).await?;
    Ok(())
}

async fn one_shot(config: &Config, query: &str, genre: Option<u32>, page: u32) -> Result<()> {
    let controller = build_controller(config)?;
    controller.set_query(query);
    controller.set_genre(genre);
    let outcome = controller.submit_page(page).await;

    print!(
        "{}",
        render::browse_view(&controller.state(), &config.images, &FavoritesStore::new())
    );
    for notification in controller.notifications().visible() {
        eprintln!("{}", render::notification_line(&notification));
    }

    if matches!(outcome, FetchOutcome::Failed(_) | FetchOutcome::Rejected) {
        std::process::exit(1);
    }
    Ok(())
}

async fn login(config: &Config, username: &str) -> Result<()> {
    eprint!("Password: ");
    io::stderr().flush()?;
    let mut password = String::new();
    io::stdin()
        .read_line(&mut password)
        .context("Failed to read password from stdin")?;
    let password = password.trim_end_matches(['\r', '\n']);

    let client = TmdbClient::from_config(&config.api).context("Failed to build API client")?;
    let flow = LoginFlow::new(Arc::new(client), session_store(config));

    match flow.login(username, password).await {
        Ok(_) => {
            println!("Logged in as {}.", username);
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    }
}
