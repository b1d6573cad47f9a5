//! Sitemap records as downloaded, and the normalised articles built from them.
//!
//! - [`RawSitemap`]: group key → list of [`RawRecord`], exactly as decoded
//! - [`Article`]: one table entry in the generated source
//!
//! The sitemap looks like:
//!
//! ```text
//! {"6": [{"type": "cat", "name": "Team management", "url": "team-management"}]}
//! ```

use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// A single sitemap entry: field name → string value.
///
/// Only `type`, `name` and `url` are read. A repeated key keeps its last
/// value and an absent key reads as an empty string.
pub type RawRecord = HashMap<String, String>;

/// The decoded sitemap document.
///
/// Group keys carry no meaning. A `BTreeMap` makes them iterate in sorted
/// order so repeated runs render identical output.
pub type RawSitemap = BTreeMap<String, Vec<RawRecord>>;

// As it may appear on the wire, where any level can be `null`.
type WireRecord = Option<HashMap<String, Option<String>>>;
type WireSitemap = Option<BTreeMap<String, Option<Vec<WireRecord>>>>;

/// Decode a sitemap document.
///
/// `null` stands for an empty value at every level: a `null` document or
/// group has no records, a `null` record has no fields and a `null` field
/// value is an empty string. Any other non-string value is a decode error.
pub fn decode_sitemap(bytes: &[u8]) -> Result<RawSitemap, serde_json::Error> {
    let wire: WireSitemap = serde_json::from_slice(bytes)?;
    let sitemap: RawSitemap = wire
        .unwrap_or_default()
        .into_iter()
        .map(|(group, records)| {
            let records: Vec<RawRecord> = records
                .unwrap_or_default()
                .into_iter()
                .map(|record| {
                    record
                        .unwrap_or_default()
                        .into_iter()
                        .map(|(key, value)| (key, value.unwrap_or_default()))
                        .collect()
                })
                .collect();
            (group, records)
        })
        .collect();
    Ok(sitemap)
}

fn field<'a>(record: &'a RawRecord, key: &str) -> &'a str {
    record.get(key).map(String::as_str).unwrap_or_default()
}

/// A help article as embedded in the generated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Sitemap entry type (e.g. `cat`, `article`).
    pub kind: String,
    /// Display title.
    pub name: String,
    /// Absolute link: base URL followed by the record's relative `url`.
    pub url: String,
    /// Lowercased `name`, matched against search tokens.
    pub search_text: String,
}

impl Article {
    pub fn from_record(record: &RawRecord, base_url: &str) -> Self {
        let name = field(record, "name");
        Self {
            kind: field(record, "type").to_string(),
            name: name.to_string(),
            url: format!("{}{}", base_url, field(record, "url")),
            search_text: name.to_lowercase(),
        }
    }
}

/// Flatten every group into one article list.
///
/// Groups are visited in key order, records in document order. Nothing is
/// deduplicated, sorted or validated.
pub fn flatten(sitemap: &RawSitemap, base_url: &str) -> Vec<Article> {
    let mut articles = Vec::with_capacity(sitemap.values().map(Vec::len).sum());
    for (group, records) in sitemap {
        debug!(%group, records = records.len(), "Flattening sitemap group");
        for record in records {
            let article = Article::from_record(record, base_url);
            debug!(?article, "Article");
            articles.push(article);
        }
    }
    articles
}
