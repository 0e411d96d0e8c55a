use chrono::{Months, NaiveDate};

use crate::models::ArticleSource;

/// Ordering applied to search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortBy {
    Relevancy,
    Popularity,
    #[default]
    MostRecent,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Relevancy, SortBy::Popularity, SortBy::MostRecent];

    /// Name shown in the filter sheet.
    pub fn name(self) -> &'static str {
        match self {
            SortBy::Relevancy => "Relevancy",
            SortBy::Popularity => "Popularity",
            SortBy::MostRecent => "MostRecent",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.name() == name)
    }
}

/// Default search window: the last month up to `today`.
pub fn default_date_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let from = today.checked_sub_months(Months::new(1)).unwrap_or(today);
    (from, today)
}

/// Criteria for an article search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFilter {
    pub query: String,
    pub sorted_by: SortBy,
    /// News language code (e.g. "en").
    pub language: String,
    pub sources: Vec<ArticleSource>,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl ArticleFilter {
    /// The unfiltered default for `language`, anchored at `today`.
    pub fn new(language: impl Into<String>, today: NaiveDate) -> Self {
        let (from_date, to_date) = default_date_range(today);
        Self {
            query: String::new(),
            sorted_by: SortBy::default(),
            language: language.into(),
            sources: Vec::new(),
            from_date,
            to_date,
        }
    }

    /// True when this filter narrows results beyond the default headlines.
    pub fn is_default(&self, today: NaiveDate) -> bool {
        let (from, to) = default_date_range(today);
        self.query.trim().is_empty()
            && self.sorted_by == SortBy::MostRecent
            && self.sources.is_empty()
            && self.from_date == from
            && self.to_date == to
    }
}
