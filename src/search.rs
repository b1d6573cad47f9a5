//! Keyword search over the article table.
//!
//! This is the same matching the generated sources embed, kept here so the
//! behaviour can be exercised directly:
//!
//! 1. lowercase the keywords
//! 2. split on `;`, `,` and space, trimming and dropping empty tokens
//! 3. for each article (table order), push it once per token its
//!    `search_text` contains
//!
//! An article matching two tokens is returned twice.

use crate::models::Article;

/// Delimiters accepted between search keywords.
pub const KEYWORD_DELIMITERS: [char; 3] = [';', ',', ' '];

/// Split a keyword string into lowercase, non-empty tokens.
pub fn tokenize(keywords: &str) -> Vec<String> {
    keywords
        .to_lowercase()
        .split(KEYWORD_DELIMITERS)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// In-memory article table, mirroring the generated `HelpDatabase`.
#[derive(Debug, Default)]
pub struct HelpDatabase {
    articles: Vec<Article>,
}

impl HelpDatabase {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn get_articles(&self, keywords: &str) -> Vec<&Article> {
        let tokens = tokenize(keywords);
        let mut result = Vec::new();
        for article in &self.articles {
            for token in &tokens {
                if article.search_text.contains(token.as_str()) {
                    result.push(article);
                }
            }
        }
        result
    }
}
