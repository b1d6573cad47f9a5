//! Command-line interface definitions for the help-article generator.
//!
//! Every option defaults to the fixed value in [`crate::config`], so running
//! the binary without arguments downloads the live sitemap and regenerates
//! `src/help_article.cc`.

use crate::config::{ARTICLE_BASE_URL, SITEMAP_CACHE_PATH, SITEMAP_URL, Settings};
use crate::outputs::Target;
use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Command-line arguments for the help-article generator.
///
/// # Examples
///
/// ```sh
/// # Regenerate the C++ table from the live sitemap
/// help_article_gen
///
/// # Rebuild from the already downloaded sitemap as a Rust module
/// help_article_gen --skip-fetch --target rust
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Sitemap endpoint to download
    #[arg(long, default_value = SITEMAP_URL)]
    pub url: Url,

    /// Prefix joined onto each article's relative URL
    #[arg(long, default_value = ARTICLE_BASE_URL)]
    pub base_url: String,

    /// Where the downloaded sitemap is stored
    #[arg(long, default_value = SITEMAP_CACHE_PATH)]
    pub cache: PathBuf,

    /// Generated source file (defaults to the target's usual path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Language of the generated source
    #[arg(short, long, value_enum, default_value_t = Target::Cpp)]
    pub target: Target,

    /// Fail instead of saving the body when the sitemap request is not 2xx
    #[arg(long)]
    pub fail_on_status: bool,

    /// Reuse the cached sitemap instead of downloading it
    #[arg(long)]
    pub skip_fetch: bool,

    /// Log what the generated search would return for these keywords
    #[arg(long, value_name = "KEYWORDS")]
    pub preview_search: Option<String>,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            sitemap_url: self.url.to_string(),
            article_base_url: self.base_url.clone(),
            cache_path: self.cache.clone(),
            output_path: self
                .output
                .clone()
                .unwrap_or_else(|| self.target.default_output_path()),
            target: self.target,
            fail_on_status: self.fail_on_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CPP_OUTPUT_PATH;

    #[test]
    fn test_no_arguments_match_fixed_settings() {
        let cli = Cli::parse_from(["help_article_gen"]);
        let settings = cli.settings();
        let defaults = Settings::default();

        assert_eq!(settings.sitemap_url, defaults.sitemap_url);
        assert_eq!(settings.article_base_url, defaults.article_base_url);
        assert_eq!(settings.cache_path, defaults.cache_path);
        assert_eq!(settings.output_path, PathBuf::from(CPP_OUTPUT_PATH));
        assert_eq!(settings.target, Target::Cpp);
        assert!(!settings.fail_on_status);
        assert!(!cli.skip_fetch);
        assert!(cli.preview_search.is_none());
    }

    #[test]
    fn test_rust_target_uses_its_own_output_path() {
        let cli = Cli::parse_from(["help_article_gen", "-t", "rust"]);
        assert_eq!(cli.settings().output_path, PathBuf::from("src/help_article.rs"));
    }

    #[test]
    fn test_explicit_output_wins() {
        let cli = Cli::parse_from([
            "help_article_gen",
            "--target",
            "rust",
            "-o",
            "/tmp/articles.rs",
            "--skip-fetch",
            "--fail-on-status",
        ]);
        let settings = cli.settings();
        assert_eq!(settings.output_path, PathBuf::from("/tmp/articles.rs"));
        assert!(settings.fail_on_status);
        assert!(cli.skip_fetch);
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let result = Cli::try_parse_from(["help_article_gen", "--url", "not a url"]);
        assert!(result.is_err());
    }
}
