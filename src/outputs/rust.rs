//! Rust module emitter.
//!
//! Writes a self-contained module: a `HelpArticle` value type,
//! `get_articles`, which behaves exactly like
//! [`crate::search::HelpDatabase::get_articles`], and the static `ARTICLES`
//! table. The first two are copied verbatim from `rust_runtime.rs`, which
//! the tests compile against a fixture table.

use crate::models::Article;
use std::fmt::{self, Write};

const HEADER: &str = "// Do not modify contents. Content is generated by running
// help_article_gen --target rust

";

const RUNTIME: &str = include_str!("rust_runtime.rs");

pub fn render(articles: &[Article]) -> Result<String, fmt::Error> {
    let mut out = String::from(HEADER);
    out.push_str(RUNTIME);
    writeln!(out)?;
    writeln!(out, "/// Every article listed in the support sitemap.")?;
    writeln!(out, "pub static ARTICLES: &[HelpArticle] = &[")?;
    for article in articles {
        // `{:?}` on str yields a valid, escaped Rust string literal.
        writeln!(out, "    HelpArticle {{")?;
        writeln!(out, "        kind: {:?},", article.kind)?;
        writeln!(out, "        name: {:?},", article.name)?;
        writeln!(out, "        url: {:?},", article.url)?;
        writeln!(out, "        search_text: {:?},", article.search_text)?;
        writeln!(out, "    }},")?;
    }
    writeln!(out, "];")?;
    Ok(out)
}
