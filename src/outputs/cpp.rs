//! C++ `HelpDatabase` emitter.
//!
//! Produces the translation unit compiled into the desktop library: a
//! constructor that fills `articles_` and the keyword search used by the
//! help search box. The header (`help_article.h`) is maintained by hand.

use crate::models::Article;
use std::fmt::{self, Write};

const PREAMBLE: &str = r#"// Copyright 2015 Toggl Desktop developers.

// Do not modify contents. Content is generated by running
// help_article_gen

#include "../src/help_article.h"

#include "Poco/StringTokenizer.h"
#include "Poco/UTF8String.h"

namespace toggl {

HelpDatabase::HelpDatabase() {
"#;

const SEARCH_FUNCTION: &str = r#"}

std::vector<HelpArticle> HelpDatabase::GetArticles(
    const std::string keywords) {
    std::string lower = Poco::UTF8::toLower(keywords);
    Poco::StringTokenizer tokenizer(lower, ";, ",
        Poco::StringTokenizer::TOK_TRIM
        | Poco::StringTokenizer::TOK_IGNORE_EMPTY);
    std::vector<HelpArticle> result;
    for (std::vector<HelpArticle>::const_iterator it = articles_.begin();
            it != articles_.end();
            it++) {
        HelpArticle article = *it;
        for (Poco::StringTokenizer::Iterator sit = tokenizer.begin();
                sit != tokenizer.end();
                ++sit) {
            std::string keyword = *sit;
            if (article.SearchText.find(keyword) != std::string::npos) {
                result.push_back(article);
            }
        }
    }
    return result;
}

}   // namespace toggl
"#;

pub fn render(articles: &[Article]) -> Result<String, fmt::Error> {
    let mut out = String::from(PREAMBLE);
    for article in articles {
        writeln!(out, "    articles_.push_back(  // NOLINT")?;
        writeln!(out, "        HelpArticle(")?;
        writeln!(out, "            \"{}\",  // NOLINT", escape(&article.kind))?;
        writeln!(out, "            \"{}\",  // NOLINT", escape(&article.name))?;
        writeln!(out, "            \"{}\",  // NOLINT", escape(&article.url))?;
        writeln!(out, "            \"{}\"));  // NOLINT", escape(&article.search_text))?;
    }
    out.push_str(SEARCH_FUNCTION);
    Ok(out)
}

/// Escape `s` for use inside a C++ narrow string literal.
///
/// Control characters use three-digit octal escapes, which cannot swallow
/// a following character the way `\x` escapes do.
fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(escaped, "\\{:03o}", c as u32);
            }
            c => escaped.push(c),
        }
    }
    escaped
}
