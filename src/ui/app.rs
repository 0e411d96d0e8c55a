use std::sync::Arc;

use chrono::{Months, NaiveDate};
use tokio::sync::mpsc;

use crate::models::{ApiError, Article, ArticleFilter};
use crate::ui::articles::{ArticlesIntent, ArticlesReducer, ArticlesState};
use crate::ui::filter::{ArticleFilterState, ArticleFilterStateHolder, FilterField};
use crate::ui::mvi::Reducer;

/// Work the UI hands to the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    LoadArticles {
        /// Tags the response so stale loads can be dropped.
        generation: u64,
        filter: ArticleFilter,
    },
}

pub type UiCommandSender = mpsc::UnboundedSender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Direction for cycling dropdowns and stepping dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Back,
    Forward,
}

pub struct App {
    should_quit: bool,
    filter: Arc<ArticleFilterStateHolder>,
    filter_focus: FilterField,
    articles: ArticlesState,
    load_generation: u64,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
    tick: usize,
}

impl App {
    pub fn new(filter: Arc<ArticleFilterStateHolder>) -> Self {
        Self {
            should_quit: false,
            filter,
            filter_focus: FilterField::default(),
            articles: ArticlesState::default(),
            load_generation: 0,
            command_sender: None,
            last_command_error: None,
            tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    // ========================================================================
    // Article list (MVI pattern)
    // ========================================================================

    pub fn articles(&self) -> &ArticlesState {
        &self.articles
    }

    pub fn dispatch_articles(&mut self, intent: ArticlesIntent) {
        dispatch_mvi!(self, articles, ArticlesReducer, intent);
    }

    /// Load articles for the applied filter.
    pub fn request_reload(&mut self) -> bool {
        self.load_generation += 1;
        let command = UiCommand::LoadArticles {
            generation: self.load_generation,
            filter: self.filter.filter(),
        };
        let sent = self.send_command(command);
        if sent {
            self.dispatch_articles(ArticlesIntent::Loading);
        }
        sent
    }

    /// Apply a finished load unless a newer one superseded it.
    pub fn on_articles_loaded(&mut self, generation: u64, result: Result<Vec<Article>, ApiError>) {
        if generation != self.load_generation {
            tracing::debug!(generation, current = self.load_generation, "Dropping stale article load");
            return;
        }
        match result {
            Ok(articles) => self.dispatch_articles(ArticlesIntent::Loaded(articles)),
            Err(error) => self.dispatch_articles(ArticlesIntent::Failed(error)),
        }
    }

    pub fn on_filter_changed(&mut self) {
        self.request_reload();
    }

    // ========================================================================
    // Filter sheet
    // ========================================================================

    pub fn filter_editor(&self) -> ArticleFilterState {
        self.filter.editor()
    }

    pub fn filter_error(&self) -> Option<ApiError> {
        self.filter.last_error()
    }

    pub fn is_filter_set(&self) -> bool {
        let today = self.filter.today();
        self.filter.editor().is_set(today)
    }

    pub fn is_filter_visible(&self) -> bool {
        self.filter.editor().is_visible
    }

    pub fn filter_focus(&self) -> FilterField {
        self.filter_focus
    }

    pub fn open_filter(&mut self) {
        self.filter_focus = FilterField::default();
        self.filter.show();
    }

    pub fn close_filter(&mut self) {
        self.filter.hide();
    }

    pub fn focus_next(&mut self) {
        self.filter_focus = self.filter_focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.filter_focus = self.filter_focus.prev();
    }

    pub fn push_query_char(&mut self, ch: char) {
        let mut query = self.filter.editor().query;
        query.push(ch);
        self.filter.set_query(query);
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.filter.editor().query;
        query.pop();
        self.filter.set_query(query);
    }

    pub fn clear_query(&mut self) {
        self.filter.set_query(String::new());
    }

    /// Change the focused dropdown or date. `large` steps dates by a month.
    pub fn step_focused(&mut self, step: Step, large: bool) {
        let editor = self.filter.editor();
        match self.filter_focus {
            FilterField::SortBy => {
                let next = cycle(&editor.sort_by_options, &editor.sort_by, step);
                self.filter.set_sort_by(next);
            }
            FilterField::Source => {
                let next = cycle(&editor.source_options, &editor.source, step);
                self.filter.set_source(next);
            }
            FilterField::Language => {
                let next = cycle(&editor.language_options, &editor.language, step);
                self.filter.set_language(next);
            }
            FilterField::FromDate => {
                if let Some(date) = step_date(editor.from_oldest_date, step, large) {
                    self.filter.set_from_date(date);
                }
            }
            FilterField::ToDate => {
                if let Some(date) = step_date(editor.to_newest_date, step, large) {
                    self.filter.set_to_date(date);
                }
            }
            FilterField::Query | FilterField::Reset | FilterField::Apply => {}
        }
    }

    /// Enter inside the sheet.
    pub fn activate_focused(&mut self) {
        match self.filter_focus {
            FilterField::Reset => {
                self.filter.reset();
                self.filter_focus = FilterField::default();
            }
            _ => self.filter.apply(),
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}

/// Neighbour of `current` in `options`, wrapping at both ends.
fn cycle(options: &[String], current: &str, step: Step) -> String {
    if options.is_empty() {
        return current.to_string();
    }
    let len = options.len();
    let index = options.iter().position(|o| o == current).unwrap_or(0);
    let next = match step {
        Step::Forward => (index + 1) % len,
        Step::Back => (index + len - 1) % len,
    };
    options[next].clone()
}

fn step_date(date: NaiveDate, step: Step, large: bool) -> Option<NaiveDate> {
    match (step, large) {
        (Step::Forward, false) => date.succ_opt(),
        (Step::Back, false) => date.pred_opt(),
        (Step::Forward, true) => date.checked_add_months(Months::new(1)),
        (Step::Back, true) => date.checked_sub_months(Months::new(1)),
    }
}
