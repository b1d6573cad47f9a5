//! Source emitters for the generated help-article table.
//!
//! Each target renders the full article list plus one fixed search function
//! into a single source file:
//!
//! | Target | Module | Default output |
//! |--------|--------|----------------|
//! | C++ | [`cpp`] | `src/help_article.cc` |
//! | Rust | [`rust`] | `src/help_article.rs` |
//!
//! Rendering is pure; writing the result is left to the caller.

pub mod cpp;
pub mod rust;

use crate::config::{CPP_OUTPUT_PATH, RUST_OUTPUT_PATH};
use crate::models::Article;
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Language of the generated source file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// `HelpDatabase` translation unit for the desktop library.
    #[default]
    Cpp,
    /// Standalone Rust module with a static table.
    Rust,
}

impl Target {
    pub fn default_output_path(self) -> PathBuf {
        match self {
            Target::Cpp => PathBuf::from(CPP_OUTPUT_PATH),
            Target::Rust => PathBuf::from(RUST_OUTPUT_PATH),
        }
    }

    /// Render `articles` into the complete source text for this target.
    pub fn render(self, articles: &[Article]) -> Result<String, fmt::Error> {
        match self {
            Target::Cpp => cpp::render(articles),
            Target::Rust => rust::render(articles),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Cpp => f.write_str("cpp"),
            Target::Rust => f.write_str("rust"),
        }
    }
}
