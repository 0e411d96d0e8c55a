use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LIST_HINTS: &str = " ↑↓: Move │ Enter: Open │ F: Filter │ R: Reload │ Q: Quit";
const DETAIL_HINTS: &str = " Esc: Back │ Q: Quit";
const FILTER_HINTS: &str = " Enter: Apply │ Esc: Close │ Ctrl+Q: Quit";

/// Which key hints to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode {
    List,
    Detail,
    Filter,
}

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, mode: FooterMode) -> Paragraph<'static> {
        let hints = match mode {
            FooterMode::List => LIST_HINTS,
            FooterMode::Detail => DETAIL_HINTS,
            FooterMode::Filter => FILTER_HINTS,
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
