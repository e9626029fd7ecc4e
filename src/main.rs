use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

use vconnect::components;
use vconnect::config::{self, Config};
use vconnect::pagination::{compute_page_window, PageRequest};

const VERSION: &str = concat!(
    env!("VCONNECT_BUILD_VERSION"),
    " (",
    compile_time::datetime_str!(),
    ")",
);

/// V-Connect — campus community client
#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about,
    long_about = "V-Connect — campus community client\n\n\
        Club discovery, institute administration and member dashboards.\n\
        Without a command the application window is launched.",
    after_long_help = "Examples:\n\
        \x20 vconnect                                  Launch the application\n\
        \x20 vconnect --config ./config.json           Launch with a custom config file\n\
        \x20 vconnect pages --total 95 --page 5        Print the page links for 95 items"
)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the page-link strip for a paginated collection
    Pages {
        /// Total number of items in the collection
        #[arg(long)]
        total: usize,
        /// Items per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,
        /// Current one-based page
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Contiguous page links around the current page
        #[arg(long)]
        max_visible: Option<usize>,
    },
}

const DEFAULT_LOGLEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first (before any other initialization)
    let cli = Cli::parse();

    // Load environment variables from .env file
    let dotenv = dotenvy::dotenv().ok();
    init_tracing();
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    let app_config = match &cli.config {
        Some(path) => {
            anyhow::ensure!(path.exists(), "Config file not found: {}", path.display());
            Config::load_from(path)
        }
        None => Config::load(),
    };

    match cli.command {
        Some(Command::Pages {
            total,
            page_size,
            page,
            max_visible,
        }) => {
            let request = PageRequest::new(
                total,
                page_size.unwrap_or(app_config.pagination.page_size),
                page,
            )
            .with_max_visible_pages(max_visible.unwrap_or(app_config.pagination.max_visible_pages));
            print_pages(&request)
        }
        None => launch(app_config),
    }
}

fn print_pages(request: &PageRequest) -> anyhow::Result<()> {
    let window = compute_page_window(request)
        .with_context(|| format!("Cannot paginate {} items", request.total_items))?;

    match window {
        Some(window) => println!("{window}"),
        None => println!("Single page, no pagination needed"),
    }
    Ok(())
}

fn launch(app_config: Config) -> anyhow::Result<()> {
    if cfg!(not(any(
        feature = "desktop",
        feature = "web",
        feature = "mobile"
    ))) {
        anyhow::bail!(
            "vconnect was built without a renderer; rebuild with `--features desktop` or `--features web`"
        );
    }

    config::install(app_config);
    tracing::info!(version = VERSION, "Launching V-Connect");
    dioxus::launch(components::App);
    Ok(())
}

fn init_tracing() {
    let env_filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOGLEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter_layer)
        .with(fmt_layer)
        .init();
}
