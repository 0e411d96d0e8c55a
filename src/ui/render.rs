use crate::ui::app::App;
use crate::ui::articles::render_articles;
use crate::ui::filter::render_filter_sheet;
use crate::ui::footer::{Footer, FooterMode};
use crate::ui::header::{Header, HeaderInfo};
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let editor = app.filter_editor();

    let info = HeaderInfo {
        language: &editor.language,
        filtered: app.is_filter_set(),
        loading: app.articles().is_loading(),
        article_count: app.articles().article_count(),
    };
    frame.render_widget(Header::new().widget(&info), header);

    frame.render_widget(Clear, body);
    render_articles(frame, body, app.articles(), app.tick());

    let mode = if editor.is_visible {
        FooterMode::Filter
    } else if app.articles().is_detail_open() {
        FooterMode::Detail
    } else {
        FooterMode::List
    };
    frame.render_widget(Footer::new().widget(footer, mode), footer);

    let error = app.filter_error();
    render_filter_sheet(frame, body, &editor, app.filter_focus(), error.as_ref());
}
