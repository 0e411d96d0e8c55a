use crate::models::{ApiError, Article};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ArticlesIntent {
    /// A request for the current filter went out.
    Loading,
    Loaded(Vec<Article>),
    Failed(ApiError),
    MoveUp,
    MoveDown,
    /// Show the detail view of the selected article.
    OpenSelected,
    CloseDetail,
}

impl Intent for ArticlesIntent {}
