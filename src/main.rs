//! # Help Article Gen
//!
//! Keeps the desktop app's offline help search in sync with the support
//! site. It downloads the support sitemap and regenerates the source file
//! that embeds every help article as a static table alongside a keyword
//! search function.
//!
//! ## Usage
//!
//! ```sh
//! help_article_gen
//! ```
//!
//! ## Pipeline
//!
//! 1. **Fetch**: GET the sitemap and stream it to `src/help/sitemap.json`
//! 2. **Generate**: decode it, flatten every group into one article list and
//!    render `src/help_article.cc`
//!
//! Any failure prints the error to stdout and exits with status 1.

use clap::Parser;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod fetch;
mod generate;
mod models;
mod outputs;
mod search;
mod utils;

use cli::Cli;
use error::Error;
use models::Article;
use search::HelpDatabase;

/// What a successful run produced.
#[derive(Debug)]
struct RunSummary {
    /// Number of articles written to the generated source.
    article_count: usize,
    /// Names returned by `--preview-search`, in result order.
    preview_matches: Option<Vec<String>>,
}

#[tokio::main]
async fn main() {
    // --- Tracing init ---
    // stdout is reserved for the byte count and the error message.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    match run(&args).await {
        Ok(summary) => debug!(
            articles = summary.article_count,
            preview = ?summary.preview_matches,
            "Run finished"
        ),
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Fetch (unless skipped), then generate.
#[instrument(level = "info", skip_all)]
async fn run(args: &Cli) -> Result<RunSummary, Error> {
    let start_time = std::time::Instant::now();
    let settings = args.settings();

    if args.skip_fetch {
        info!(path = %settings.cache_path.display(), "Skipping download; using cached sitemap");
    } else {
        fetch::download_sitemap(&settings).await?;
    }

    let articles = generate::generate_source(&settings).await?;
    let article_count = articles.len();
    let preview_matches = args
        .preview_search
        .as_deref()
        .map(|keywords| preview_search(articles, keywords));

    let elapsed = start_time.elapsed();
    info!(?elapsed, article_count, "Execution complete");
    Ok(RunSummary {
        article_count,
        preview_matches,
    })
}

/// Log what the generated search returns for `keywords`.
fn preview_search(articles: Vec<Article>, keywords: &str) -> Vec<String> {
    let db = HelpDatabase::new(articles);
    let found = db.get_articles(keywords);
    info!(%keywords, matches = found.len(), "Search preview");
    found
        .into_iter()
        .map(|article| {
            info!(name = %article.name, url = %article.url, "Search preview match");
            article.name.clone()
        })
        .collect()
}
