use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keepsake_core::{memory::SortOrder, storage::Database, AppConfig};

mod commands;

#[derive(Parser)]
#[command(name = "keepsake")]
#[command(author, version, about = "Photos, videos and love letters on a shared timeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a photo or video to the gallery
    AddMedia {
        /// Title shown in the gallery
        #[arg(short, long)]
        title: String,
        /// Path to the image or video file
        #[arg(short, long)]
        file: String,
        /// Date of the moment (YYYY-MM-DD or RFC 3339)
        #[arg(short, long)]
        date: String,
        /// Optional description
        #[arg(long)]
        description: Option<String>,
        /// Tag to attach (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Write a love letter
    AddLetter {
        #[arg(short, long)]
        title: String,
        /// Letter text
        #[arg(short, long)]
        content: String,
        /// Date of the letter (YYYY-MM-DD or RFC 3339)
        #[arg(short, long)]
        date: String,
    },
    /// Show the gallery
    Gallery {
        /// Search in tags, titles and descriptions
        #[arg(short, long)]
        search: Option<String>,
        /// date-desc, date-asc, created-desc or created-asc
        #[arg(long)]
        sort: Option<SortOrder>,
    },
    /// Show the letters journal
    Letters,
    /// List all tags
    Tags,
    /// Remove a photo or video from the gallery
    DeleteMedia {
        id: String,
    },
    /// Remove a letter
    DeleteLetter {
        id: String,
    },
    /// Show media and letters on a timeline
    Timeline(commands::timeline::TimelineArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Initialize database
    let db = Database::new(&config).await?;

    match cli.command {
        Commands::AddMedia {
            title,
            file,
            date,
            description,
            tags,
        } => commands::add_media::run(&db, title, &file, &date, description, tags).await,
        Commands::AddLetter {
            title,
            content,
            date,
        } => commands::add_letter::run(&db, title, content, &date).await,
        Commands::Gallery { search, sort } => {
            let sort = sort.unwrap_or(config.gallery.default_sort);
            commands::gallery::run(&db, search, sort).await
        }
        Commands::Letters => commands::letters::run(&db).await,
        Commands::Tags => commands::tags::run(&db).await,
        Commands::DeleteMedia { id } => commands::delete::media(&db, &id).await,
        Commands::DeleteLetter { id } => commands::delete::letter(&db, &id).await,
        Commands::Timeline(args) => commands::timeline::run(&db, &config, args).await,
    }
}
