use crate::models::{ApiError, Article};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ArticlesState {
    #[default]
    Idle,
    Loading,
    Loaded {
        articles: Vec<Article>,
        selected: usize,
        /// Detail view of the selected article is open.
        detail: bool,
    },
    Failed {
        error: ApiError,
    },
}

impl UiState for ArticlesState {}

impl ArticlesState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_detail_open(&self) -> bool {
        matches!(self, Self::Loaded { detail: true, .. })
    }

    pub fn selected_article(&self) -> Option<&Article> {
        match self {
            Self::Loaded {
                articles, selected, ..
            } => articles.get(*selected),
            _ => None,
        }
    }

    pub fn article_count(&self) -> usize {
        match self {
            Self::Loaded { articles, .. } => articles.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_default() {
        assert_eq!(ArticlesState::default(), ArticlesState::Idle);
    }

    #[test]
    fn selected_article_only_when_loaded() {
        assert!(ArticlesState::Loading.selected_article().is_none());
        let state = ArticlesState::Loaded {
            articles: vec![Article {
                title: "Hello".to_string(),
                ..Article::default()
            }],
            selected: 0,
            detail: false,
        };
        assert_eq!(state.selected_article().map(|a| a.title.as_str()), Some("Hello"));
        assert_eq!(state.article_count(), 1);
    }
}
