use crate::models::{default_date_range, ArticleFilter, SortBy};
use crate::ui::filter::intent::FilterIntent;
use crate::ui::filter::state::{
    build_source_options, language_display_name, ArticleFilterState, FilterState, ALL_SOURCES,
};
use crate::ui::mvi::Reducer;
use crate::usecase::NewsLanguage;

pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = FilterState;
    type Intent = FilterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FilterIntent::Show => state.editor.is_visible = true,
            FilterIntent::Hide => state.editor.is_visible = false,
            FilterIntent::SetQuery(query) => state.editor.query = query,
            FilterIntent::SetSortBy(name) => {
                let sort = SortBy::from_name(&name).unwrap_or(SortBy::MostRecent);
                state.editor.sort_by = sort.name().to_string();
            }
            FilterIntent::SetSource(name) => {
                let known = name == ALL_SOURCES || state.catalog.iter().any(|s| s.name == name);
                if known {
                    state.editor.source = name;
                }
            }
            FilterIntent::SetLanguage(name) => {
                if let Some(code) = NewsLanguage::code_by_name(&name) {
                    switch_language(&mut state, code);
                }
            }
            FilterIntent::SetFromDate(date) => {
                let date = date.min(state.today);
                state.editor.from_oldest_date = date;
                if state.editor.to_newest_date < date {
                    state.editor.to_newest_date = date;
                }
            }
            FilterIntent::SetToDate(date) => {
                let date = date.min(state.today);
                state.editor.to_newest_date = date;
                if state.editor.from_oldest_date > date {
                    state.editor.from_oldest_date = date;
                }
            }
            FilterIntent::Reset => {
                state.applied = ArticleFilter::new(state.language_code.clone(), state.today);
                let mut editor = ArticleFilterState::new(state.today);
                editor.language = language_display_name(&state.language_code);
                editor.source_options = build_source_options(&state.catalog, &state.language_code);
                state.editor = editor;
            }
            FilterIntent::Apply => {
                state.applied = to_article_filter(&state);
                state.editor.is_visible = false;
            }
            FilterIntent::SourcesLoaded(sources) => {
                state.catalog = sources;
                state.editor.source_options =
                    build_source_options(&state.catalog, &state.language_code);
                if !state.editor.source_options.contains(&state.editor.source) {
                    state.editor.source = ALL_SOURCES.to_string();
                }
                state.last_error = None;
            }
            FilterIntent::SourcesFailed(error) => state.last_error = Some(error),
            FilterIntent::LocaleChanged(code) => {
                if code != state.language_code && NewsLanguage::name_by_code(&code).is_some() {
                    switch_language(&mut state, &code);
                }
            }
            FilterIntent::DayChanged(today) => {
                // Default ranges follow the calendar; custom ones are kept.
                let (old_from, old_to) = default_date_range(state.today);
                let (from, to) = default_date_range(today);
                let editor = &mut state.editor;
                if editor.from_oldest_date == old_from && editor.to_newest_date == old_to {
                    editor.from_oldest_date = from;
                    editor.to_newest_date = to;
                }
                let applied = &mut state.applied;
                if applied.from_date == old_from && applied.to_date == old_to {
                    applied.from_date = from;
                    applied.to_date = to;
                }
                state.today = today;
            }
        }
        state
    }
}

/// Move the sheet to `code`, keeping the stored name canonical.
fn switch_language(state: &mut FilterState, code: &str) {
    // A source belongs to one language; switching invalidates it.
    if code != state.language_code {
        state.editor.source = ALL_SOURCES.to_string();
    }
    state.editor.language = language_display_name(code);
    state.editor.source_options = build_source_options(&state.catalog, code);
    state.language_code = code.to_string();
}

fn to_article_filter(state: &FilterState) -> ArticleFilter {
    let editor = &state.editor;
    ArticleFilter {
        query: editor.query.clone(),
        sorted_by: SortBy::from_name(&editor.sort_by).unwrap_or_default(),
        language: state.language_code.clone(),
        sources: state
            .catalog
            .iter()
            .filter(|source| source.name == editor.source)
            .cloned()
            .collect(),
        from_date: editor.from_oldest_date,
        to_date: editor.to_newest_date,
    }
}
