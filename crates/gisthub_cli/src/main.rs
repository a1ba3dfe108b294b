//! GistHub CLI - command-line interface for browsing and managing gists.

mod commands;
mod config;

use clap::{Parser, Subcommand, ValueEnum};
use gisthub::models::{DiscoverGistsMode, GistListsMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gisthub")]
#[command(version)]
#[command(about = "Browse and manage GitHub gists from the terminal")]
#[command(
    long_about = "GistHub lists, inspects, and edits GitHub gists through the \
authenticated REST API, and browses public gists (per-user listings, discovery \
feeds, full-text search) through the unauthenticated companion service."
)]
#[command(after_long_help = r##"EXAMPLES
    List your own gists:
        $ gisthub gists

    Discover forked public gists, second page:
        $ gisthub discover forked --page 2

    Search public gists:
        $ gisthub search "binary tree"

    Update one file of a gist:
        $ gisthub update abc123 notes.md --content "# updated"

CONFIGURATION
    GistHub reads configuration from:
      1. ~/.config/gisthub/config.toml (or $XDG_CONFIG_HOME/gisthub/config.toml)
      2. ./gisthub.toml
      3. Environment variables (GISTHUB_* prefix, e.g., GISTHUB_GITHUB_TOKEN)
      4. .env file in current directory

ENVIRONMENT VARIABLES
    GISTHUB_GITHUB_TOKEN    GitHub personal access token
    GISTHUB_SERVER_URL      Companion service base override
"##)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List your own gists
    Gists,
    /// List starred gists (yours, or a user's public ones)
    Starred {
        /// List another user's public starred gists instead of your own
        #[arg(short, long)]
        user: Option<String>,

        /// Page number (public listings only)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// List a user's public gists
    User {
        /// Username
        user_name: String,

        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Search public gists
    Search {
        /// Search query
        query: String,

        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Browse the public discovery feeds
    Discover {
        /// Which feed to browse
        #[arg(value_enum, default_value_t = DiscoverKind::All)]
        kind: DiscoverKind,

        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show a single gist with its files
    Get {
        /// Gist identifier
        gist_id: String,
    },
    /// Star a gist
    Star {
        /// Gist identifier
        gist_id: String,
    },
    /// Unstar a gist
    Unstar {
        /// Gist identifier
        gist_id: String,
    },
    /// Check whether a gist is starred
    Check {
        /// Gist identifier
        gist_id: String,
    },
    /// Update a gist's description and one of its files
    Update {
        /// Gist identifier
        gist_id: String,

        /// File to update (a new name creates the file)
        file_name: String,

        /// New file content
        #[arg(short, long)]
        content: String,

        /// New gist description (left untouched when omitted)
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a gist
    Delete {
        /// Gist identifier
        gist_id: String,
    },
    /// List comments on a gist
    Comments {
        /// Gist identifier
        gist_id: String,
    },
    /// Show who you are authenticated as
    Whoami,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DiscoverKind {
    All,
    Forked,
    Starred,
}

impl From<DiscoverKind> for DiscoverGistsMode {
    fn from(kind: DiscoverKind) -> Self {
        match kind {
            DiscoverKind::All => DiscoverGistsMode::All,
            DiscoverKind::Forked => DiscoverGistsMode::Forked,
            DiscoverKind::Starred => DiscoverGistsMode::Starred,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::Config::load();

    match cli.command {
        Commands::Gists => {
            commands::list(&config, GistListsMode::CurrentUserGists, 1, true).await
        }
        Commands::Starred { user, page } => {
            let needs_token = user.is_none();
            commands::list(
                &config,
                GistListsMode::UserStarredGists { user_name: user },
                page,
                needs_token,
            )
            .await
        }
        Commands::User { user_name, page } => {
            commands::list(&config, GistListsMode::UserGists { user_name }, page, false).await
        }
        Commands::Search { query, page } => {
            commands::list(&config, GistListsMode::Search { query }, page, false).await
        }
        Commands::Discover { kind, page } => {
            commands::list(
                &config,
                GistListsMode::Discover { mode: kind.into() },
                page,
                false,
            )
            .await
        }
        Commands::Get { gist_id } => commands::get(&config, &gist_id).await,
        Commands::Star { gist_id } => commands::star(&config, &gist_id).await,
        Commands::Unstar { gist_id } => commands::unstar(&config, &gist_id).await,
        Commands::Check { gist_id } => commands::check(&config, &gist_id).await,
        Commands::Update {
            gist_id,
            file_name,
            content,
            description,
        } => {
            commands::update(
                &config,
                &gist_id,
                &file_name,
                &content,
                description.as_deref(),
            )
            .await
        }
        Commands::Delete { gist_id } => commands::delete(&config, &gist_id).await,
        Commands::Comments { gist_id } => commands::comments(&config, &gist_id).await,
        Commands::Whoami => commands::whoami(&config).await,
    }
}
