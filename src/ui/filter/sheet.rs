//! Filter sheet overlay, anchored to the bottom of the article list.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::ApiError;
use crate::ui::filter::state::ArticleFilterState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR};

const SHEET_WIDTH: u16 = 60;
const LABEL_WIDTH: usize = 10;
const QUERY_PLACEHOLDER: &str = "Search topics";

/// Focusable rows of the sheet, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Query,
    SortBy,
    Source,
    Language,
    FromDate,
    ToDate,
    Reset,
    Apply,
}

impl FilterField {
    const ORDER: [FilterField; 8] = [
        FilterField::Query,
        FilterField::SortBy,
        FilterField::Source,
        FilterField::Language,
        FilterField::FromDate,
        FilterField::ToDate,
        FilterField::Reset,
        FilterField::Apply,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Render the sheet when the editor is visible.
pub fn render_filter_sheet(
    frame: &mut Frame,
    area: Rect,
    state: &ArticleFilterState,
    focus: FilterField,
    error: Option<&ApiError>,
) {
    if !state.is_visible {
        return;
    }

    let lines = sheet_lines(state, focus, error);
    let height = (lines.len() as u16).saturating_add(2).min(area.height);
    let width = SHEET_WIDTH.min(area.width);
    let sheet = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height),
        width,
        height,
    };

    frame.render_widget(Clear, sheet);
    let block = Block::default()
        .title(Span::styled(" Filter ", Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), sheet);
}

fn sheet_lines(
    state: &ArticleFilterState,
    focus: FilterField,
    error: Option<&ApiError>,
) -> Vec<Line<'static>> {
    let query = if state.query.is_empty() {
        Span::styled(QUERY_PLACEHOLDER, Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(state.query.clone(), Style::default().fg(HEADER_TEXT))
    };
    let mut query_spans = vec![label("Search", focus == FilterField::Query), query];
    if focus == FilterField::Query {
        query_spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    if !state.query.is_empty() {
        query_spans.push(Span::styled("  ✕ Del", Style::default().fg(MUTED_TEXT)));
    }

    let mut lines = vec![
        Line::from(""),
        Line::from(query_spans),
        dropdown("Sort by", &state.sort_by, focus == FilterField::SortBy),
        dropdown("Sources", &state.source, focus == FilterField::Source),
        dropdown("Language", &state.language, focus == FilterField::Language),
        dropdown(
            "From",
            &state.from_oldest_date.format("%Y-%m-%d").to_string(),
            focus == FilterField::FromDate,
        ),
        dropdown(
            "To",
            &state.to_newest_date.format("%Y-%m-%d").to_string(),
            focus == FilterField::ToDate,
        ),
        Line::from(""),
        buttons(focus),
        Line::from(""),
        Line::from(Span::styled(
            " Tab/↑↓: Move  ←→: Change  Enter: Apply  Esc: Close",
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    if let Some(error) = error {
        lines.push(Line::from(vec![
            Span::styled(" Sources unavailable: ", Style::default().fg(STATUS_ERROR)),
            Span::styled(error.to_string(), Style::default().fg(HEADER_TEXT)),
        ]));
    }
    lines
}

fn label(text: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Span::styled(format!(" {:<width$}", text, width = LABEL_WIDTH), style)
}

fn dropdown(name: &str, value: &str, focused: bool) -> Line<'static> {
    let value_style = if focused {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Line::from(vec![
        label(name, focused),
        Span::styled(format!("‹ {} ›", value), value_style),
    ])
}

fn buttons(focus: FilterField) -> Line<'static> {
    let style = |selected: bool| {
        if selected {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        }
    };

    Line::from(vec![
        Span::raw("          "),
        Span::styled(" Reset ", style(focus == FilterField::Reset)),
        Span::raw("          "),
        Span::styled(" Apply ", style(focus == FilterField::Apply)),
    ])
}
