/*
[INPUT]:  Current user profile
[OUTPUT]: Upload view with department-specific link hints
[POS]:    TUI UI - employee upload tab
[UPDATE]: When upload hints or hotkeys change
*/

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};

use taskdesk_client::UserProfile;

use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_submit_view(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    user: &UserProfile,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Upload Task");

    let text = Text::from(vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Department: "),
            Span::styled(
                user.department_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(link_hint(&user.department_name)),
        Line::from(""),
        Line::from("Press [u] to open the upload form."),
    ]);

    let widget = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn link_hint(department_name: &str) -> String {
    match department_name {
        "Creative" => "Example link: https://www.youtube.com/".to_string(),
        "Sales" => "Example link: https://docs.google.com/".to_string(),
        _ => "Paste the link URL of your finished work.".to_string(),
    }
}
