/*
[INPUT]:  Available tabs for the current role and the active tab
[OUTPUT]: Tab bar rendered into the Ratatui frame
[POS]:    TUI UI - tab navigation
[UPDATE]: When tabs or their hotkeys change
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::tui::app::Tab;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_tabs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    tabs: &[Tab],
    current: Tab,
) {
    let titles: Vec<Line> = tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| Line::from(format!("[{}] {}", index + 1, tab.title())))
        .collect();
    let selected = tabs.iter().position(|tab| *tab == current).unwrap_or(0);

    let widget = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Views"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(widget, area);
}
