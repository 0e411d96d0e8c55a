//! Wire payloads of the NewsAPI v2 endpoints and their mapping to models.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::Deserialize;

use crate::models::{ApiError, Article, ArticleSource};

/// Any body the API may answer with.
///
/// Variant order matters: an error payload carries neither `articles` nor
/// `sources`, so it only matches the last arm.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NewsApiResponse {
    Articles(NewsApiArticles),
    Sources(NewsApiSources),
    Error(NewsApiError),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiArticles {
    pub status: String,
    #[serde(default)]
    pub total_results: u64,
    pub articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Clone, Deserialize, Hash)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiArticle {
    #[serde(default)]
    pub source: Option<NewsApiArticleSource>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Hash)]
pub struct NewsApiArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsApiSources {
    pub status: String,
    pub sources: Vec<NewsApiSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsApiSource {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsApiError {
    pub status: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl NewsApiResponse {
    pub fn into_articles(self) -> Result<Vec<Article>, ApiError> {
        match self {
            NewsApiResponse::Articles(payload) => {
                Ok(payload.articles.into_iter().map(Article::from).collect())
            }
            NewsApiResponse::Error(error) => Err(error.into_api_error()),
            NewsApiResponse::Sources(_) => Err(ApiError::parse_error()),
        }
    }

    pub fn into_sources(self) -> Result<Vec<ArticleSource>, ApiError> {
        match self {
            NewsApiResponse::Sources(payload) => {
                Ok(payload.sources.into_iter().map(ArticleSource::from).collect())
            }
            NewsApiResponse::Error(error) => Err(error.into_api_error()),
            NewsApiResponse::Articles(_) => Err(ApiError::parse_error()),
        }
    }
}

impl NewsApiError {
    /// Anything that is not an explicit `"status": "error"` body is a shape
    /// we do not understand.
    fn into_api_error(self) -> ApiError {
        if self.status != "error" {
            return ApiError::parse_error();
        }
        ApiError::new(
            self.code.unwrap_or_else(|| ApiError::UNKNOWN_CODE.to_string()),
            self.message.unwrap_or_else(|| ApiError::NO_MESSAGE.to_string()),
        )
    }
}

impl From<NewsApiArticle> for Article {
    fn from(dto: NewsApiArticle) -> Self {
        let id = article_id(&dto);
        Article {
            id,
            source: dto.source.and_then(|s| s.name).unwrap_or_default(),
            title: dto.title.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            content: dto.content.unwrap_or_default(),
            image_url: dto.url_to_image.unwrap_or_default(),
            content_url: dto.url.unwrap_or_default(),
            author: dto.author.unwrap_or_default(),
            published_at: dto.published_at.unwrap_or_default(),
        }
    }
}

impl From<NewsApiSource> for ArticleSource {
    fn from(dto: NewsApiSource) -> Self {
        ArticleSource {
            id: dto.id.unwrap_or_default(),
            name: dto.name,
            language: dto.language.unwrap_or_else(|| "en".to_string()),
            category: dto.category.unwrap_or_else(|| "general".to_string()),
        }
    }
}

fn article_id(dto: &NewsApiArticle) -> String {
    let mut hasher = DefaultHasher::new();
    dto.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> NewsApiResponse {
        serde_json::from_str(body).expect("valid payload")
    }

    #[test]
    fn articles_payload_maps_with_defaults() {
        let response = parse(
            r#"{"status":"ok","totalResults":1,"articles":[
                {"source":{"id":null,"name":"Heise"},"author":null,"title":"Rust 2.0",
                 "description":null,"url":"https://example.com/a","urlToImage":null,
                 "publishedAt":"2024-05-01T10:00:00Z","content":null}
            ]}"#,
        );
        let articles = response.into_articles().unwrap();
        assert_eq!(articles.len(), 1);
        let article = &articles[0];
        assert_eq!(article.source, "Heise");
        assert_eq!(article.title, "Rust 2.0");
        assert_eq!(article.description, "");
        assert_eq!(article.content_url, "https://example.com/a");
        assert_eq!(article.image_url, "");
        assert_eq!(article.id.len(), 16);
    }

    #[test]
    fn article_id_is_stable() {
        let body = r#"{"status":"ok","articles":[{"title":"A","url":"u"}]}"#;
        let first = parse(body).into_articles().unwrap();
        let second = parse(body).into_articles().unwrap();
        assert_eq!(first[0].id, second[0].id);
    }

    #[test]
    fn sources_payload_fills_language_and_category() {
        let response = parse(r#"{"status":"ok","sources":[{"id":null,"name":"Spiegel"}]}"#);
        let sources = response.into_sources().unwrap();
        assert_eq!(
            sources[0],
            ArticleSource {
                id: String::new(),
                name: "Spiegel".to_string(),
                language: "en".to_string(),
                category: "general".to_string(),
            }
        );
    }

    #[test]
    fn error_payload_keeps_code_and_message() {
        let response = parse(
            r#"{"status":"error","code":"rateLimited","message":"Too many requests"}"#,
        );
        let err = response.into_articles().unwrap_err();
        assert_eq!(err, ApiError::new("rateLimited", "Too many requests"));
    }

    #[test]
    fn error_payload_without_fields_uses_fallbacks() {
        let err = parse(r#"{"status":"error"}"#).into_sources().unwrap_err();
        assert_eq!(err.code, ApiError::UNKNOWN_CODE);
        assert_eq!(err.message, ApiError::NO_MESSAGE);
    }

    #[test]
    fn unexpected_shape_is_parse_error() {
        let err = parse(r#"{"status":"ok"}"#).into_articles().unwrap_err();
        assert_eq!(err, ApiError::parse_error());
    }

    #[test]
    fn wrong_endpoint_payload_is_parse_error() {
        let err = parse(r#"{"status":"ok","sources":[]}"#)
            .into_articles()
            .unwrap_err();
        assert_eq!(err.code, ApiError::PARSE_ERROR);
    }
}
