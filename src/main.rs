// blogspin entry point.
// Syncs each listed blog, then rotates random posts onto stdout and into the browser.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use rand::seq::IndexedRandom;
use tracing::{error, info, warn};

mod blogger;
mod cache;
mod error;
mod picker;
mod site;

use crate::blogger::BloggerClient;
use crate::error::{BlogspinError, Result};
use crate::site::{Site, SyncOptions};

#[derive(Parser, Debug)]
#[command(name = "blogspin")]
#[command(about = "Keep local snapshots of Blogger blogs and open random posts", long_about = None)]
struct Cli {
    /// File listing one blog URL per line
    #[arg(long, default_value = "blogs.txt")]
    blogs: PathBuf,

    /// How many random posts to open, one draw per site pick
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// Skip checking sites with existing snapshots for new posts
    #[arg(long)]
    no_update: bool,

    /// Rebuild every site's snapshot from scratch
    #[arg(long)]
    refresh: bool,

    /// Print ten random posts per site and exit without opening a browser
    #[arg(long)]
    ten: bool,

    /// Override the directory snapshots are stored under
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("blogspin=info")),
        )
        .init();

    let cli = Cli::parse();

    let data_dir = match cli.cache_dir.clone() {
        Some(dir) => dir,
        None => cache::default_data_dir()
            .ok_or_else(|| BlogspinError::Other("could not determine a data directory".into()))?,
    };

    let client = BloggerClient::from_env()?;
    let sites = load_sites(&cli.blogs, &data_dir)?;
    if sites.is_empty() {
        warn!("No sites listed in {}", cli.blogs.display());
        return Ok(());
    }

    let options = SyncOptions {
        check_updates: !cli.no_update,
        refresh: cli.refresh,
    };

    // Sites are synced serially; one failing site must not block the rest.
    // A site whose update failed still serves its last known-good snapshot.
    let mut pool: Vec<Site> = Vec::new();
    for mut site in sites {
        if let Err(e) = site.sync(&client, options).await {
            error!("Sync failed for {}: {}", site.host(), e);
        }
        if site.posts().is_empty() {
            warn!("No posts available for {}", site.host());
        } else {
            pool.push(site);
        }
    }

    if pool.is_empty() {
        warn!("Nothing to pick from");
        return Ok(());
    }

    let mut rng = rand::rng();

    if cli.ten {
        for site in &pool {
            println!("------------");
            let picks = picker::sample_posts(site.posts(), 10, &mut rng);
            picker::print_posts(&picks);
        }
        return Ok(());
    }

    for _ in 0..cli.count {
        let Some(site) = pool.choose(&mut rng) else {
            break;
        };
        let picks = picker::sample_posts(site.posts(), 1, &mut rng);
        picker::print_posts(&picks);
        if let Err(e) = picker::open_in_browser(&picks) {
            warn!("Could not open browser for {}: {}", site.host(), e);
        }
    }

    Ok(())
}

/// Read the newline-delimited site list. Blank lines are skipped, and a
/// malformed URL drops only its own line.
fn load_sites(path: &Path, data_dir: &Path) -> Result<Vec<Site>> {
    let listing = fs::read_to_string(path)?;

    let mut sites = Vec::new();
    for line in listing.lines() {
        let url = line.trim();
        if url.is_empty() {
            continue;
        }
        match Site::new(url, data_dir) {
            Ok(site) => sites.push(site),
            Err(e) => error!("Ignoring {}: {}", url, e),
        }
    }

    info!("Loaded {} sites from {}", sites.len(), path.display());
    Ok(sites)
}
