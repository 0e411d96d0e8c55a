//! Article list and detail rendering.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::models::Article;
use crate::ui::articles::state::ArticlesState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render_articles(frame: &mut Frame, area: Rect, state: &ArticlesState, tick: usize) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match state {
        ArticlesState::Idle => message(frame, inner, "Press r to load articles.", MUTED_TEXT),
        ArticlesState::Loading => {
            let spinner = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
            let line = Line::from(vec![
                Span::styled(format!(" {} ", spinner), Style::default().fg(STATUS_OK)),
                Span::styled("Loading articles...", Style::default().fg(HEADER_TEXT)),
            ]);
            frame.render_widget(Paragraph::new(vec![Line::from(""), line]), inner);
        }
        ArticlesState::Failed { error } => {
            let lines = vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(" Error: ", Style::default().fg(STATUS_ERROR)),
                    Span::styled(error.to_string(), Style::default().fg(HEADER_TEXT)),
                ]),
                Line::from(""),
                Line::from(Span::styled(" Press r to retry.", Style::default().fg(MUTED_TEXT))),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        }
        ArticlesState::Loaded {
            articles,
            selected,
            detail,
        } => {
            if articles.is_empty() {
                message(frame, inner, "No articles match this filter.", MUTED_TEXT);
            } else if *detail {
                if let Some(article) = articles.get(*selected) {
                    render_detail(frame, inner, article);
                }
            } else {
                render_list(frame, inner, articles, *selected);
            }
        }
    }
}

fn message(frame: &mut Frame, area: Rect, text: &'static str, color: Color) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {}", text), Style::default().fg(color))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_list(frame: &mut Frame, area: Rect, articles: &[Article], selected: usize) {
    let items: Vec<ListItem> = articles
        .iter()
        .map(|article| {
            let meta = match (article.source.is_empty(), published_day(article)) {
                (false, Some(day)) => format!("{} · {}", article.source, day),
                (false, None) => article.source.clone(),
                (true, Some(day)) => day.to_string(),
                (true, None) => String::new(),
            };
            ListItem::new(vec![
                Line::from(Span::styled(
                    article.title.clone(),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(meta, Style::default().fg(MUTED_TEXT))),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▌");
    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_detail(frame: &mut Frame, area: Rect, article: &Article) {
    let mut lines = vec![
        Line::from(Span::styled(
            article.title.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(byline(article), Style::default().fg(MUTED_TEXT))),
        Line::from(""),
    ];
    if !article.description.is_empty() {
        lines.push(Line::from(Span::styled(
            article.description.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    }
    if !article.content.is_empty() {
        lines.push(Line::from(Span::styled(
            article.content.clone(),
            Style::default().fg(HEADER_TEXT),
        )));
        lines.push(Line::from(""));
    }
    if !article.content_url.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Read more: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(article.content_url.clone(), Style::default().fg(ACCENT)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn byline(article: &Article) -> String {
    let mut parts = Vec::new();
    if !article.source.is_empty() {
        parts.push(article.source.as_str());
    }
    if !article.author.is_empty() {
        parts.push(article.author.as_str());
    }
    if let Some(day) = published_day(article) {
        parts.push(day);
    }
    parts.join(" · ")
}

/// Date part of the RFC 3339 publication timestamp.
fn published_day(article: &Article) -> Option<&str> {
    article.published_at.get(..10)
}
