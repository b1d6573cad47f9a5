//! Fixed endpoints and paths, and the [`Settings`] handed to each stage.
//!
//! Every value has a compile-time default. A plain run of the binary uses
//! exactly these; the CLI only exists to point the stages elsewhere.

use crate::outputs::Target;
use std::path::PathBuf;

/// Sitemap listing every published help article, grouped by section.
pub const SITEMAP_URL: &str = "https://support.toggl.com/sitemap/";

/// Prefix joined onto each record's relative `url`.
pub const ARTICLE_BASE_URL: &str = "https://support.toggl.com/";

/// Where the downloaded sitemap is cached between the two stages.
pub const SITEMAP_CACHE_PATH: &str = "src/help/sitemap.json";

/// Generated C++ translation unit.
pub const CPP_OUTPUT_PATH: &str = "src/help_article.cc";

/// Generated Rust module.
pub const RUST_OUTPUT_PATH: &str = "src/help_article.rs";

/// Run settings shared by the fetch and generate stages.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Endpoint the sitemap is downloaded from.
    pub sitemap_url: String,
    /// Prefix for article URLs. Concatenated as-is, no normalisation.
    pub article_base_url: String,
    /// Local copy of the downloaded sitemap.
    pub cache_path: PathBuf,
    /// File the rendered source is written to.
    pub output_path: PathBuf,
    /// Language of the generated source.
    pub target: Target,
    /// Refuse to persist a response whose status is not 2xx.
    pub fail_on_status: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let target = Target::default();
        Self {
            sitemap_url: SITEMAP_URL.to_string(),
            article_base_url: ARTICLE_BASE_URL.to_string(),
            cache_path: PathBuf::from(SITEMAP_CACHE_PATH),
            output_path: target.default_output_path(),
            target,
            fail_on_status: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.sitemap_url, SITEMAP_URL);
        assert_eq!(settings.article_base_url, ARTICLE_BASE_URL);
        assert_eq!(settings.cache_path, PathBuf::from("src/help/sitemap.json"));
        assert_eq!(settings.output_path, PathBuf::from("src/help_article.cc"));
        assert_eq!(settings.target, Target::Cpp);
        assert!(!settings.fail_on_status);
    }
}
