//! Command-line front end for the AniList GraphQL API.
//!
//! Every subcommand maps onto one accessor of the `anilist` crate and prints
//! the returned JSON to stdout.

use std::time::Duration;

use anilist::query::Identifier;
use anilist::{AniListClient, DEFAULT_URL, QueryResult};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

// ============================================================================
// CLI Arguments
// ============================================================================

/// Query AniList from the command line.
#[derive(Parser, Debug)]
#[command(name = "anilist-cli")]
#[command(version, about, long_about = None)]
struct Args {
    /// AniList access token; omit for anonymous access
    #[arg(long, env = "ANILIST_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GraphQL endpoint
    #[arg(long, env = "ANILIST_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Abandon requests after this many seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print compact instead of pretty JSON
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch an anime by id, or by title
    Anime {
        /// AniList id or title
        ident: String,
    },
    /// Fetch a manga by id, or by title
    Manga {
        /// AniList id or title
        ident: String,
    },
    /// Fetch a character by id or name
    Character {
        /// AniList id or name
        ident: String,
    },
    /// Fetch a staff member by id or name
    Staff {
        /// AniList id or name
        ident: String,
    },
    /// Fetch a studio by id or name
    Studio {
        /// AniList id or name
        ident: String,
    },
    /// Fetch a user's profile
    User {
        /// User id or username
        ident: String,
    },
    /// Fetch a user's statistics
    Stats {
        /// User id or username
        ident: String,
    },
    /// Fetch a user's anime or manga lists
    List {
        /// Which list to fetch
        #[arg(value_enum)]
        kind: ListKind,
        /// User id or username
        user: String,
    },
    /// Fetch the profile owning the token
    Viewer,
    /// Search AniList
    Search {
        /// anime, manga, character, staff or studio
        kind: String,
        /// Search term
        term: String,
        /// Page number (defaults to 1)
        #[arg(long)]
        page: Option<u32>,
        /// Results per page (defaults to 5, AniList caps it at 25)
        #[arg(long)]
        amount: Option<u32>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ListKind {
    Anime,
    Manga,
}

// ============================================================================
// Main
// ============================================================================

async fn run(client: &AniListClient, command: Command) -> anilist::Result<QueryResult> {
    match command {
        Command::Anime { ident } => match Identifier::parse(&ident) {
            Identifier::ById(id) => client.media().anime(id).await,
            Identifier::ByName(title) => client.media().anime_by_title(&title).await,
        },
        Command::Manga { ident } => match Identifier::parse(&ident) {
            Identifier::ById(id) => client.media().manga(id).await,
            Identifier::ByName(title) => client.media().manga_by_title(&title).await,
        },
        Command::Character { ident } => client.people().character(Identifier::parse(&ident)).await,
        Command::Staff { ident } => client.people().staff(Identifier::parse(&ident)).await,
        Command::Studio { ident } => client.studios().get(Identifier::parse(&ident)).await,
        Command::User { ident } => client.users().profile(Identifier::parse(&ident)).await,
        Command::Stats { ident } => client.users().stats(Identifier::parse(&ident)).await,
        Command::List { kind, user } => {
            let user = Identifier::parse(&user);
            match kind {
                ListKind::Anime => client.lists().anime(user).await,
                ListKind::Manga => client.lists().manga(user).await,
            }
        }
        Command::Viewer => client.users().viewer().await,
        Command::Search {
            kind,
            term,
            page,
            amount,
        } => client.search(&kind, &term, page, amount).await,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut builder = AniListClient::builder().url(&args.url);
    if let Some(token) = args.token {
        builder = builder.token(token);
    }
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;

    info!(
        url = %args.url,
        auth = ?client.auth().mode(),
        "Starting anilist-cli"
    );
    debug!(command = ?args.command, "Running command");

    let result = run(&client, args.command).await?;

    let output = if args.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{output}");

    Ok(())
}
