use chrono::{Local, NaiveDate};

use crate::models::{default_date_range, ApiError, ArticleFilter, ArticleSource, SortBy};
use crate::ui::mvi::UiState;
use crate::usecase::NewsLanguage;

/// Source selection meaning "no source restriction".
pub const ALL_SOURCES: &str = "All";

/// Values shown in the filter sheet while the user edits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFilterState {
    pub is_visible: bool,
    pub query: String,
    /// Name of the selected [`SortBy`].
    pub sort_by: String,
    pub sort_by_options: Vec<String>,
    /// [`ALL_SOURCES`] or the name of a catalog source.
    pub source: String,
    pub source_options: Vec<String>,
    /// Display name of the news language.
    pub language: String,
    pub language_options: Vec<String>,
    pub from_oldest_date: NaiveDate,
    pub to_newest_date: NaiveDate,
}

impl ArticleFilterState {
    pub fn new(today: NaiveDate) -> Self {
        let (from, to) = default_date_range(today);
        Self {
            is_visible: false,
            query: String::new(),
            sort_by: SortBy::default().name().to_string(),
            sort_by_options: SortBy::ALL.iter().map(|s| s.name().to_string()).collect(),
            source: ALL_SOURCES.to_string(),
            source_options: vec![ALL_SOURCES.to_string()],
            language: "English".to_string(),
            language_options: NewsLanguage::options(),
            from_oldest_date: from,
            to_newest_date: to,
        }
    }

    /// True when any criterion differs from its default.
    pub fn is_set(&self, today: NaiveDate) -> bool {
        let (from, to) = default_date_range(today);
        !self.query.trim().is_empty()
            || self.sort_by != SortBy::default().name()
            || self.source != ALL_SOURCES
            || self.from_oldest_date != from
            || self.to_newest_date != to
    }
}

impl Default for ArticleFilterState {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

/// Everything the filter reducer works on.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Sheet values, not yet applied.
    pub editor: ArticleFilterState,
    /// Filter used for article loading.
    pub applied: ArticleFilter,
    /// Source catalog from the last successful fetch.
    pub catalog: Vec<ArticleSource>,
    /// Current news-language code.
    pub language_code: String,
    /// Anchor for date defaults and clamping.
    pub today: NaiveDate,
    /// Last failure of the source stream.
    pub last_error: Option<ApiError>,
}

impl FilterState {
    pub fn new(language_code: &str, today: NaiveDate) -> Self {
        let mut editor = ArticleFilterState::new(today);
        editor.language = language_display_name(language_code);
        Self {
            editor,
            applied: ArticleFilter::new(language_code, today),
            catalog: Vec::new(),
            language_code: language_code.to_string(),
            today,
            last_error: None,
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new("en", Local::now().date_naive())
    }
}

impl UiState for FilterState {}

/// `All` followed by the catalog sources published in `language_code`.
pub fn build_source_options(catalog: &[ArticleSource], language_code: &str) -> Vec<String> {
    let mut options = vec![ALL_SOURCES.to_string()];
    for source in catalog.iter().filter(|s| s.language == language_code) {
        if !options.contains(&source.name) {
            options.push(source.name.clone());
        }
    }
    options
}

pub(crate) fn language_display_name(code: &str) -> String {
    NewsLanguage::name_by_code(code)
        .map(str::to_string)
        .unwrap_or_else(|| code.to_string())
}
