//! Observable owner of the filter state.
//!
//! Merges the asynchronous source stream with user edits through
//! [`FilterReducer`] and publishes the results on two watch channels:
//! the sheet values and the applied filter.
//!
//! The holder also follows the shared [`LocaleStore`], so a language set
//! elsewhere reaches the sheet, and rolls its date defaults over when the
//! clock passes midnight.

use std::sync::{Arc, Weak};

use chrono::NaiveDate;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_stream::{Stream, StreamExt};

use crate::models::{ApiError, ArticleFilter};
use crate::ui::filter::intent::FilterIntent;
use crate::ui::filter::reducer::FilterReducer;
use crate::ui::filter::state::{ArticleFilterState, FilterState};
use crate::ui::mvi::Reducer;
use crate::usecase::{LocaleStore, SourcesResult};

/// Source of the current calendar day.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

pub struct ArticleFilterStateHolder {
    state: Mutex<FilterState>,
    clock: Clock,
    editor_tx: watch::Sender<ArticleFilterState>,
    filter_tx: watch::Sender<ArticleFilter>,
    locale: LocaleStore,
    subscription: Mutex<Option<JoinHandle<()>>>,
}

impl ArticleFilterStateHolder {
    /// Holder pinned to a fixed day.
    pub fn new(locale: LocaleStore, today: NaiveDate) -> Self {
        Self::with_clock(locale, Arc::new(move || today))
    }

    pub fn with_clock(locale: LocaleStore, clock: Clock) -> Self {
        let state = FilterState::new(&locale.language_code(), clock());
        let (editor_tx, _) = watch::channel(state.editor.clone());
        let (filter_tx, _) = watch::channel(state.applied.clone());
        Self {
            state: Mutex::new(state),
            clock,
            editor_tx,
            filter_tx,
            locale,
            subscription: Mutex::new(None),
        }
    }

    /// Subscribe to the source catalog stream and to locale changes.
    ///
    /// Replaces any previous subscription. The task holds only a weak
    /// reference, so dropping the holder ends it as well. The locale is
    /// still followed after a finite source stream ends.
    pub fn start<S>(self: &Arc<Self>, sources: S)
    where
        S: Stream<Item = SourcesResult> + Send + 'static,
    {
        let holder: Weak<Self> = Arc::downgrade(self);
        let mut locale_rx = self.locale.subscribe();
        let handle = tokio::spawn(async move {
            tokio::pin!(sources);
            let mut sources_open = true;
            loop {
                tokio::select! {
                    item = sources.next(), if sources_open => {
                        let Some(result) = item else {
                            sources_open = false;
                            continue;
                        };
                        let Some(holder) = holder.upgrade() else {
                            break;
                        };
                        holder.update_filter_sources(result);
                    }
                    changed = locale_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let code = locale_rx.borrow_and_update().clone();
                        let Some(holder) = holder.upgrade() else {
                            break;
                        };
                        holder.dispatch(FilterIntent::LocaleChanged(code));
                    }
                }
            }
        });
        if let Some(previous) = self.subscription.lock().replace(handle) {
            previous.abort();
        }
    }

    /// Unsubscribe from the source stream.
    pub fn stop(&self) {
        if let Some(handle) = self.subscription.lock().take() {
            handle.abort();
        }
    }

    /// Sheet values; changes on every edit.
    pub fn filter_editor_state(&self) -> watch::Receiver<ArticleFilterState> {
        self.editor_tx.subscribe()
    }

    /// Applied filter; changes on apply and reset.
    pub fn current_filter(&self) -> watch::Receiver<ArticleFilter> {
        self.filter_tx.subscribe()
    }

    pub fn editor(&self) -> ArticleFilterState {
        self.editor_tx.borrow().clone()
    }

    pub fn filter(&self) -> ArticleFilter {
        self.filter_tx.borrow().clone()
    }

    pub fn last_error(&self) -> Option<ApiError> {
        self.state.lock().last_error.clone()
    }

    /// Current day; rolls the date defaults over first when it changed.
    pub fn today(&self) -> NaiveDate {
        let today = (self.clock)();
        let stale = self.state.lock().today != today;
        if stale {
            self.dispatch(FilterIntent::DayChanged(today));
        }
        today
    }

    pub fn show(&self) {
        self.dispatch(FilterIntent::Show);
    }

    pub fn hide(&self) {
        self.dispatch(FilterIntent::Hide);
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.dispatch(FilterIntent::SetQuery(query.into()));
    }

    pub fn set_sort_by(&self, sort_by: impl Into<String>) {
        self.dispatch(FilterIntent::SetSortBy(sort_by.into()));
    }

    pub fn set_source(&self, source: impl Into<String>) {
        self.dispatch(FilterIntent::SetSource(source.into()));
    }

    pub fn set_language(&self, language: impl Into<String>) {
        self.dispatch(FilterIntent::SetLanguage(language.into()));
    }

    pub fn set_from_date(&self, date: NaiveDate) {
        self.dispatch(FilterIntent::SetFromDate(date));
    }

    pub fn set_to_date(&self, date: NaiveDate) {
        self.dispatch(FilterIntent::SetToDate(date));
    }

    pub fn reset(&self) {
        self.dispatch(FilterIntent::Reset);
    }

    pub fn apply(&self) {
        self.dispatch(FilterIntent::Apply);
    }

    fn update_filter_sources(&self, result: SourcesResult) {
        match result {
            Ok(sources) => self.dispatch(FilterIntent::SourcesLoaded(sources)),
            Err(err) => {
                tracing::warn!("Source catalog unavailable: {}", err);
                self.dispatch(FilterIntent::SourcesFailed(err.to_api_error()));
            }
        }
    }

    /// Run the reducer, then publish whatever changed.
    pub fn dispatch(&self, intent: FilterIntent) {
        let today = (self.clock)();
        let mut state = self.state.lock();
        let mut next = std::mem::take(&mut *state);
        if next.today != today {
            next = FilterReducer::reduce(next, FilterIntent::DayChanged(today));
        }
        let next = FilterReducer::reduce(next, intent);

        if next.language_code != self.locale.language_code() {
            self.locale.set_language_code(&next.language_code);
        }
        publish(&self.editor_tx, &next.editor);
        if publish(&self.filter_tx, &next.applied) {
            tracing::info!(
                query = %next.applied.query,
                language = %next.applied.language,
                sources = next.applied.sources.len(),
                "Filter applied"
            );
        }

        *state = next;
    }
}

impl Drop for ArticleFilterStateHolder {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Replace the channel value only when it differs, notifying on change.
fn publish<T: Clone + PartialEq>(tx: &watch::Sender<T>, value: &T) -> bool {
    tx.send_if_modified(|current| {
        if current == value {
            return false;
        }
        *current = value.clone();
        true
    })
}
