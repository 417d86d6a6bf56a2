//! CLI entry point for carbophile-content

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carbophile_content::content::ContentKind;
use carbophile_content::{commands, Site};

#[derive(Parser)]
#[command(name = "carbophile-content")]
#[command(version)]
#[command(about = "Load, search and list the Carbophile blog and project content", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new content site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// List a collection, newest first
    #[command(alias = "ls")]
    List {
        /// Collection to list (blog, projects)
        #[arg(default_value = "blog")]
        kind: ContentKind,

        /// Content language (defaults to the configured default)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Show a single item
    Show {
        /// Collection (blog, projects)
        kind: ContentKind,

        /// Item slug (file name without extension)
        slug: String,

        /// Content language
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Fuzzy search a collection and print one page of results
    Search {
        /// Collection (blog, projects)
        kind: ContentKind,

        /// Search query; empty shows everything
        #[arg(default_value = "")]
        query: String,

        /// Content language
        #[arg(short, long)]
        lang: Option<String>,

        /// Page to show
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Print every (language, slug) route for static export
    Params,

    /// Create a new post or project
    New {
        /// Collection (blog, projects)
        kind: ContentKind,

        /// Title of the new item
        title: String,

        /// Content language
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "carbophile_content=debug,info"
    } else {
        "carbophile_content=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            commands::init::init_site(&target_dir)?;
            println!("Initialized content site in {:?}", target_dir);
        }

        Commands::List { kind, lang } => {
            let site = Site::new(&base_dir)?;
            commands::list::run(&site, kind, lang.as_deref()).await?;
        }

        Commands::Show { kind, slug, lang } => {
            let site = Site::new(&base_dir)?;
            commands::show::run(&site, kind, &slug, lang.as_deref()).await?;
        }

        Commands::Search {
            kind,
            query,
            lang,
            page,
        } => {
            let site = Site::new(&base_dir)?;
            commands::search::run(&site, kind, &query, lang.as_deref(), page).await?;
        }

        Commands::Params => {
            let site = Site::new(&base_dir)?;
            commands::params::run(&site).await?;
        }

        Commands::New { kind, title, lang } => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Creating new {} with title: {}", kind, title);
            commands::new::run(&site, kind, &title, lang.as_deref())?;
        }

        Commands::Version => {
            println!("carbophile-content version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
