use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::{Article, ArticleFilter};
use crate::news::{NewsApi, NewsError};
use crate::usecase::LocaleStore;

/// Chooses between headlines and search for the article list.
#[derive(Clone)]
pub struct LoadArticles {
    api: Arc<dyn NewsApi>,
    locale: LocaleStore,
    category: String,
}

impl LoadArticles {
    pub fn new(api: Arc<dyn NewsApi>, locale: LocaleStore, category: impl Into<String>) -> Self {
        Self {
            api,
            locale,
            category: category.into(),
        }
    }

    /// Headlines in the current locale for an untouched filter, a full
    /// search otherwise.
    pub async fn load(
        &self,
        filter: &ArticleFilter,
        today: NaiveDate,
    ) -> Result<Vec<Article>, NewsError> {
        if filter.is_default(today) {
            let language = self.locale.language_code();
            self.api.get_headlines(&language, &self.category).await
        } else {
            self.api.get_everything(filter).await
        }
    }
}
