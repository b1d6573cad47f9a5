//! Source generation from the cached sitemap.
//!
//! read → decode → flatten → render → write. The first failing step aborts
//! the run, and the output file is only touched once rendering succeeded.

use crate::config::Settings;
use crate::error::DataError;
use crate::models::{Article, decode_sitemap, flatten};
use crate::utils::looks_truncated;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Generate the help-article source from `settings.cache_path` into
/// `settings.output_path`.
///
/// # Returns
///
/// The articles embedded in the generated file, in table order.
#[instrument(
    level = "info",
    skip_all,
    fields(
        cache = %settings.cache_path.display(),
        output = %settings.output_path.display(),
        target = %settings.target
    )
)]
pub async fn generate_source(settings: &Settings) -> Result<Vec<Article>, DataError> {
    let cache_path = &settings.cache_path;
    let bytes = fs::read(cache_path).await.map_err(|source| DataError::Read {
        path: cache_path.clone(),
        source,
    })?;

    let sitemap = decode_sitemap(&bytes).map_err(|source| {
        if looks_truncated(&source) {
            warn!(
                bytes = bytes.len(),
                "Cached sitemap ends early; the download was probably cut off"
            );
        }
        DataError::Decode(source)
    })?;
    info!(groups = sitemap.len(), "Decoded sitemap");

    let articles = flatten(&sitemap, &settings.article_base_url);
    let source = settings.target.render(&articles)?;

    let output_path = &settings.output_path;
    fs::write(output_path, &source)
        .await
        .map_err(|source| DataError::Write {
            path: output_path.clone(),
            source,
        })?;
    info!(
        articles = articles.len(),
        bytes = source.len(),
        "Wrote generated source"
    );

    Ok(articles)
}
