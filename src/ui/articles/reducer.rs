use crate::ui::articles::intent::ArticlesIntent;
use crate::ui::articles::state::ArticlesState;
use crate::ui::mvi::Reducer;

pub struct ArticlesReducer;

impl Reducer for ArticlesReducer {
    type State = ArticlesState;
    type Intent = ArticlesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ArticlesIntent::Loading => ArticlesState::Loading,
            ArticlesIntent::Loaded(articles) => ArticlesState::Loaded {
                articles,
                selected: 0,
                detail: false,
            },
            ArticlesIntent::Failed(error) => ArticlesState::Failed { error },
            ArticlesIntent::MoveUp => match state {
                ArticlesState::Loaded {
                    articles,
                    selected,
                    detail: false,
                } => {
                    let selected = if selected == 0 {
                        articles.len().saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    ArticlesState::Loaded {
                        articles,
                        selected,
                        detail: false,
                    }
                }
                other => other,
            },
            ArticlesIntent::MoveDown => match state {
                ArticlesState::Loaded {
                    articles,
                    selected,
                    detail: false,
                } => {
                    let selected = if selected + 1 >= articles.len() {
                        0
                    } else {
                        selected + 1
                    };
                    ArticlesState::Loaded {
                        articles,
                        selected,
                        detail: false,
                    }
                }
                other => other,
            },
            ArticlesIntent::OpenSelected => match state {
                ArticlesState::Loaded {
                    articles, selected, ..
                } => {
                    let detail = selected < articles.len();
                    ArticlesState::Loaded {
                        articles,
                        selected,
                        detail,
                    }
                }
                other => other,
            },
            ArticlesIntent::CloseDetail => match state {
                ArticlesState::Loaded {
                    articles, selected, ..
                } => ArticlesState::Loaded {
                    articles,
                    selected,
                    detail: false,
                },
                other => other,
            },
        }
    }
}
