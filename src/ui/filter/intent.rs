use chrono::NaiveDate;

use crate::models::{ApiError, ArticleSource};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FilterIntent {
    Show,
    Hide,
    SetQuery(String),
    /// Unknown names fall back to the default ordering.
    SetSortBy(String),
    /// Ignored unless `All` or a catalog source name.
    SetSource(String),
    /// Display name; ignored when not a news language.
    SetLanguage(String),
    SetFromDate(NaiveDate),
    SetToDate(NaiveDate),
    /// Restore defaults for both the sheet and the applied filter.
    Reset,
    /// Copy the sheet into the applied filter and hide it.
    Apply,
    SourcesLoaded(Vec<ArticleSource>),
    /// Language code set on the shared locale; unknown codes are ignored.
    LocaleChanged(String),
    /// The calendar day moved on.
    DayChanged(NaiveDate),
    SourcesFailed(ApiError),
}

impl Intent for FilterIntent {}
