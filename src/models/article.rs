/// A single news article, already mapped from the API payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Article {
    /// Stable identifier derived from the article payload.
    pub id: String,
    /// Display name of the publishing source.
    pub source: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub image_url: String,
    /// Link to the full article.
    pub content_url: String,
    pub author: String,
    /// Publication timestamp as sent by the API (RFC 3339).
    pub published_at: String,
}

/// A publisher the API can filter by.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleSource {
    /// API identifier used in the `sources` query parameter.
    pub id: String,
    pub name: String,
    /// Two-letter news language code.
    pub language: String,
    pub category: String,
}
