/// A help article from the support site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpArticle {
    pub kind: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub search_text: &'static str,
}

/// Articles whose lowercased name contains any of the `;`, `,` or space
/// separated keywords, once per matching keyword.
pub fn get_articles(keywords: &str) -> Vec<&'static HelpArticle> {
    let lower = keywords.to_lowercase();
    let tokens: Vec<&str> = lower
        .split([';', ',', ' '])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();
    let mut result = Vec::new();
    for article in ARTICLES {
        for token in &tokens {
            if article.search_text.contains(*token) {
                result.push(article);
            }
        }
    }
    result
}
