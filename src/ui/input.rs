use crate::ui::app::{App, Step};
use crate::ui::articles::ArticlesIntent;
use crate::ui::filter::FilterField;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.is_filter_visible() {
        handle_filter_key(app, key);
        return;
    }

    if app.articles().is_detail_open() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) {
            app.dispatch_articles(ArticlesIntent::CloseDetail);
        } else if matches!(key.code, KeyCode::Char('q')) {
            app.request_quit();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('f') | KeyCode::Char('/') => app.open_filter(),
        KeyCode::Char('r') => {
            app.request_reload();
        }
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_articles(ArticlesIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_articles(ArticlesIntent::MoveDown),
        KeyCode::Enter | KeyCode::Right => app.dispatch_articles(ArticlesIntent::OpenSelected),
        _ => {}
    }
}

fn handle_filter_key(app: &mut App, key: KeyEvent) {
    let large = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Esc => app.close_filter(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter => app.activate_focused(),
        KeyCode::Left => app.step_focused(Step::Back, large),
        KeyCode::Right => app.step_focused(Step::Forward, large),
        _ if app.filter_focus() == FilterField::Query => edit_query(app, key),
        _ => {}
    }
}

fn edit_query(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.clear_query();
        return;
    }
    match key.code {
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Delete => app.clear_query(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_query_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
