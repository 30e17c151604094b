/*
[INPUT]:  ReviewState filter selections and vocabulary status
[OUTPUT]: Filter summary bar rendered above the task table
[POS]:    TUI UI - filter bar
[UPDATE]: When filters or their hotkeys change
*/

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use taskdesk_tui::grouping::month_name;
use taskdesk_tui::ReviewState;

use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_filter_bar(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    review: &ReviewState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Filters");

    let line = if let Some(error) = review.vocabulary_error.as_deref() {
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::LightRed),
        ))
    } else {
        let year = review
            .selected_year
            .map(|year| year.to_string())
            .unwrap_or_else(|| "All".to_string());
        let month = review
            .selected_month
            .map(|month| month_name(month).to_string())
            .unwrap_or_else(|| "All".to_string());

        let mut spans = vec![
            Span::raw(format!("Year: {year}")),
            Span::raw("  |  "),
            Span::raw(format!("Month: {month}")),
        ];
        if review.role.is_manager() {
            let department = review
                .selected_department
                .as_deref()
                .unwrap_or("All")
                .to_string();
            spans.push(Span::raw("  |  "));
            spans.push(Span::raw(format!("Department: {department}")));
        }
        spans.push(Span::raw("  |  "));
        spans.push(Span::raw(format!("Group: {}", review.group_by.label())));
        spans.push(Span::raw("  |  "));
        spans.push(Span::raw(format!("Sort: {}", review.sort_order.label())));
        Line::from(spans)
    };

    let widget = Paragraph::new(line).block(block);
    frame.render_widget(widget, area);
}
