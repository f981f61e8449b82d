use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use random_episode::cache_store::CacheStore;
use random_episode::catalog::Catalog;
use random_episode::catalog_scraper::CatalogScraper;
use random_episode::config::{AppConfig, ConfigBuilder, DEFAULT_CATALOG_URL, DEFAULT_SHOW, RunMode};
use random_episode::launcher::{BrowserLauncher, Launcher, PrintLauncher};
use random_episode::page_fetcher::HttpFetcher;
use random_episode::picker::make_rng;
use random_episode::runner::{self, CancelToken};

/// Opens a random episode of a show in the default browser.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Show name used to find seasons and parse episode titles
    #[arg(long, default_value = DEFAULT_SHOW)]
    show: String,

    /// Catalog listing page
    #[arg(long, default_value = DEFAULT_CATALOG_URL)]
    catalog_url: String,

    /// Directory for cache files and the seed file
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Seed for reproducible picks; overrides the seed file
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<i64>,

    /// Keep offering new episodes until `q` or Ctrl-C
    #[arg(long)]
    repeat: bool,

    /// Print the episode URL instead of opening it
    #[arg(long)]
    dry_run: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<AppConfig> {
        let mut builder = ConfigBuilder::new()
            .show(self.show)
            .catalog_url(self.catalog_url)
            .seed(self.seed)
            .mode(if self.repeat { RunMode::Repeat } else { RunMode::Once })
            .dry_run(self.dry_run);

        if let Some(dir) = self.data_dir {
            builder = builder.data_dir(dir);
        }

        builder.build()
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "random_episode=debug" } else { "random_episode=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn install_interrupt_handler(cancel: &CancelToken) -> Result<()> {
    let cancel = cancel.clone();
    ctrlc::set_handler(move || {
        println!("\nStopping after the current episode...");
        cancel.cancel();
    })
    .context("Failed to install Ctrl-C handler")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.into_config()?;

    println!("Random Episode: {}", config.show);
    println!("===================");

    let cancel = CancelToken::new();
    if config.mode == RunMode::Repeat {
        install_interrupt_handler(&cancel)?;
    }

    let cache = CacheStore::open(&config.data_dir)?;
    let mut rng = make_rng(config.seed, &config.seed_path());

    let scraper = CatalogScraper::new(HttpFetcher::new()?, &config.show, &config.catalog_url)?;
    let catalog = Catalog::new(scraper, cache);

    let launcher: Box<dyn Launcher> = if config.dry_run {
        Box::new(PrintLauncher)
    } else {
        Box::new(BrowserLauncher)
    };

    let stdin = io::stdin();
    let launched = runner::run(
        &catalog,
        &mut rng,
        launcher.as_ref(),
        config.mode,
        &cancel,
        stdin.lock(),
    )?;

    tracing::debug!(launched, "done");
    Ok(())
}
