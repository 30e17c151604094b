/*
[INPUT]:  Pager window, page position, and total counts
[OUTPUT]: Pagination bar rendered below the task table
[POS]:    TUI UI - pagination controls
[UPDATE]: When the page window or hotkeys change
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use taskdesk_tui::Pager;

use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_pagination(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    pager: &Pager,
) {
    let dim = Style::default().fg(Color::DarkGray);
    let current = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    spans.push(Span::styled(
        "Prev",
        if pager.current_page == 1 {
            dim
        } else {
            Style::default()
        },
    ));
    spans.push(Span::raw("  "));

    for page in pager.window() {
        if page == pager.current_page {
            spans.push(Span::styled(format!(" {page} "), current));
        } else {
            spans.push(Span::raw(format!(" {page} ")));
        }
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        "Next",
        if pager.current_page == pager.total_pages {
            dim
        } else {
            Style::default()
        },
    ));
    spans.push(Span::raw(format!(
        "    Page {}/{} | {} tasks | limit {}",
        pager.current_page, pager.total_pages, pager.total_tasks, pager.limit
    )));

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Pages"),
    );
    frame.render_widget(widget, area);
}
