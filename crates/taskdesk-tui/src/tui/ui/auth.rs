/*
[INPUT]:  Login screen hints
[OUTPUT]: Splash panel rendered while no session is active
[POS]:    TUI UI - unauthenticated screen
[UPDATE]: When login-screen hotkeys change
*/

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_login_screen(frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Taskdesk");

    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Employee Task Portal",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Sign in to submit tasks or review your team's work."),
        Line::from(""),
        Line::from("Press [l] to sign in, [n] to create an account, [q] to quit."),
    ]);

    let widget = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
