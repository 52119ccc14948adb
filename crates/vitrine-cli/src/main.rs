use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_core::AppConfig;
use vitrine_view::PageKind;

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Preview tool for scroll-driven marketing pages")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Content API base origin (overrides config and VITRINE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load posts and print the featured post and the filtered listing
    Blog {
        /// Category to filter by
        #[arg(short, long, default_value = "All")]
        category: String,
    },
    /// Load posts and print the number of posts per category
    Categories,
    /// Simulate scrolling a page top to bottom and print every frame's channels
    Scroll {
        #[arg(short, long, value_enum, default_value_t = PageArg::Blog)]
        page: PageArg,
        /// Frames taken to scroll from top to bottom
        #[arg(short, long, default_value_t = 60)]
        frames: u32,
        /// Extra frames after the scroll stops, to watch the spring settle
        #[arg(long, default_value_t = 30)]
        settle: u32,
    },
    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PageArg {
    Blog,
    Industries,
}

impl From<PageArg> for PageKind {
    fn from(page: PageArg) -> Self {
        match page {
            PageArg::Blog => PageKind::Blog,
            PageArg::Industries => PageKind::Industries,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if let Some(api_url) = &cli.api_url {
        config.apply_base_url(api_url)?;
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::debug!("Content source: {}", config.source.base_url);

    match cli.command {
        Some(Commands::Blog { category }) => commands::blog::run(&config, &category).await,
        Some(Commands::Categories) | None => commands::categories::run(&config).await,
        Some(Commands::Scroll {
            page,
            frames,
            settle,
        }) => commands::scroll::run(&config, page.into(), frames, settle),
        Some(Commands::Config { save }) => commands::config::run(&config, save),
    }
}
