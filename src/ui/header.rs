use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_WARN};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// What the header shows about the current screen.
pub struct HeaderInfo<'a> {
    pub language: &'a str,
    pub filtered: bool,
    pub loading: bool,
    pub article_count: usize,
}

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, info: &HeaderInfo<'_>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_color = if info.loading { STATUS_WARN } else { STATUS_OK };
        let scope = if info.filtered { "Filtered" } else { "Top headlines" };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(status_color)),
            Span::styled("  ", text_style),
            Span::styled("acaraus", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(info.language.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(scope, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} articles", info.article_count), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
