use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::NewsConfig;
use crate::models::{Article, ArticleFilter, ArticleSource, SortBy};
use crate::news::dto::NewsApiResponse;
use crate::news::error::NewsError;

const HEADLINES_PATH: &str = "/v2/top-headlines";
const SOURCES_PATH: &str = "/v2/top-headlines/sources";
const EVERYTHING_PATH: &str = "/v2/everything";

const API_KEY_HEADER: &str = "X-Api-Key";

const CATEGORY: &str = "category";
const QUERY: &str = "q";
const SOURCES: &str = "sources";
const LANGUAGE: &str = "language";
const SORT_BY: &str = "sortBy";
const FROM_DATE: &str = "from";
const TO_DATE: &str = "to";

/// Read access to the news aggregation API.
#[async_trait]
pub trait NewsApi: Send + Sync {
    /// Top headlines for a language and category.
    async fn get_headlines(
        &self,
        language: &str,
        category: &str,
    ) -> Result<Vec<Article>, NewsError>;

    /// Source catalog; `None` arguments are not sent, returning every source.
    async fn get_sources(
        &self,
        language: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<ArticleSource>, NewsError>;

    /// Full-text search narrowed by `filter`.
    async fn get_everything(&self, filter: &ArticleFilter) -> Result<Vec<Article>, NewsError>;
}

/// `NewsApi` over HTTP.
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl NewsApiClient {
    pub fn new(config: &NewsConfig) -> Result<Self, NewsError> {
        let client = Client::builder()
            .user_agent(concat!("acaraus/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(NewsError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn path(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the body, whatever the HTTP status.
    async fn fetch(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<NewsApiResponse, NewsError> {
        let mut request = self.client.get(self.path(path)).query(query);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(|e| NewsError::Transport {
            endpoint: path.to_string(),
            source: e,
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|e| NewsError::Transport {
            endpoint: path.to_string(),
            source: e,
        })?;
        tracing::debug!(endpoint = path, status = status.as_u16(), bytes = body.len(), "news response");

        serde_json::from_str(&body).map_err(|e| NewsError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl NewsApi for NewsApiClient {
    async fn get_headlines(
        &self,
        language: &str,
        category: &str,
    ) -> Result<Vec<Article>, NewsError> {
        let query = [
            (LANGUAGE, language.to_string()),
            (CATEGORY, category.to_string()),
        ];
        Ok(self.fetch(HEADLINES_PATH, &query).await?.into_articles()?)
    }

    async fn get_sources(
        &self,
        language: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<ArticleSource>, NewsError> {
        let mut query = Vec::new();
        if let Some(language) = language {
            query.push((LANGUAGE, language.to_string()));
        }
        if let Some(category) = category {
            query.push((CATEGORY, category.to_string()));
        }
        Ok(self.fetch(SOURCES_PATH, &query).await?.into_sources()?)
    }

    async fn get_everything(&self, filter: &ArticleFilter) -> Result<Vec<Article>, NewsError> {
        let query = everything_query(filter);
        Ok(self.fetch(EVERYTHING_PATH, &query).await?.into_articles()?)
    }
}

/// Query parameters for `/v2/everything`.
///
/// `sortBy` goes out with every search, with or without selected sources.
pub fn everything_query(filter: &ArticleFilter) -> Vec<(&'static str, String)> {
    let mut query = vec![(LANGUAGE, filter.language.clone())];
    if !filter.query.trim().is_empty() {
        query.push((QUERY, filter.query.clone()));
    }
    if !filter.sources.is_empty() {
        let ids = filter
            .sources
            .iter()
            .map(|source| source.id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        query.push((SOURCES, ids));
    }
    query.push((SORT_BY, api_sort_by(filter.sorted_by).to_string()));
    query.push((FROM_DATE, filter.from_date.format("%Y-%m-%d").to_string()));
    query.push((TO_DATE, filter.to_date.format("%Y-%m-%d").to_string()));
    query
}

fn api_sort_by(sort: SortBy) -> &'static str {
    match sort {
        SortBy::Relevancy => "relevancy",
        SortBy::Popularity => "popularity",
        SortBy::MostRecent => "publishedAt",
    }
}
