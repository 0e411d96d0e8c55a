//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_news;

use acaraus::config::NewsConfig;
use acaraus::models::{ApiError, Article, ArticleFilter, ArticleSource};
use acaraus::news::{NewsApi, NewsApiClient, NewsError};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;

pub use mock_news::{CapturedRequest, MockNewsApi, MockResponse};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn source(id: &str, name: &str, language: &str) -> ArticleSource {
    ArticleSource {
        id: id.to_string(),
        name: name.to_string(),
        language: language.to_string(),
        category: "general".to_string(),
    }
}

pub fn article(title: &str) -> Article {
    Article {
        id: title.to_lowercase(),
        title: title.to_string(),
        ..Article::default()
    }
}

/// Client pointed at a mock server with a fixed key.
pub fn client_for(mock: &MockNewsApi) -> NewsApiClient {
    let config = NewsConfig {
        base_url: mock.base_url(),
        api_key: Some("test-key".to_string()),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    NewsApiClient::new(&config).expect("client builds")
}

/// Which `NewsApi` operation a fake saw.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Headlines { language: String, category: String },
    Sources,
    Everything(ArticleFilter),
}

/// `NewsApi` fake returning canned results and recording calls.
#[derive(Default)]
pub struct FakeNewsApi {
    pub calls: Mutex<Vec<ApiCall>>,
    pub sources: Vec<ArticleSource>,
    pub articles: Vec<Article>,
    pub fail_with: Option<ApiError>,
}

impl FakeNewsApi {
    pub fn with_sources(sources: Vec<ArticleSource>) -> Arc<Self> {
        Arc::new(Self {
            sources,
            ..Self::default()
        })
    }

    pub fn with_articles(articles: Vec<Article>) -> Arc<Self> {
        Arc::new(Self {
            articles,
            ..Self::default()
        })
    }

    pub fn failing(error: ApiError) -> Arc<Self> {
        Arc::new(Self {
            fail_with: Some(error),
            ..Self::default()
        })
    }

    fn check(&self) -> Result<(), NewsError> {
        match &self.fail_with {
            Some(error) => Err(NewsError::Api(error.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NewsApi for FakeNewsApi {
    async fn get_headlines(&self, language: &str, category: &str) -> Result<Vec<Article>, NewsError> {
        self.calls.lock().await.push(ApiCall::Headlines {
            language: language.to_string(),
            category: category.to_string(),
        });
        self.check()?;
        Ok(self.articles.clone())
    }

    async fn get_sources(
        &self,
        _language: Option<&str>,
        _category: Option<&str>,
    ) -> Result<Vec<ArticleSource>, NewsError> {
        self.calls.lock().await.push(ApiCall::Sources);
        self.check()?;
        Ok(self.sources.clone())
    }

    async fn get_everything(&self, filter: &ArticleFilter) -> Result<Vec<Article>, NewsError> {
        self.calls.lock().await.push(ApiCall::Everything(filter.clone()));
        self.check()?;
        Ok(self.articles.clone())
    }
}
