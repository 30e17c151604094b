/*
[INPUT]:  ReviewState page slice grouped for display, selected row
[OUTPUT]: Grouped task tables rendered into the Ratatui frame
[POS]:    TUI UI - task list rendering
[UPDATE]: When table columns or group rendering change
*/

use ratatui::layout::{Alignment, Constraint};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use taskdesk_tui::grouping::group_title;
use taskdesk_tui::ReviewState;

use crate::tui::runtime::{border_style, header_style, status_style};

pub(in crate::tui) fn draw_task_table(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    review: &ReviewState,
    selected: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(if review.role.is_manager() {
            "All Tasks"
        } else {
            "My Tasks"
        });

    if review.loading {
        let widget = Paragraph::new("Loading tasks...")
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(widget, area);
        return;
    }

    if let Some(error) = review.error.as_ref() {
        let widget = Paragraph::new(error.to_string())
            .style(Style::default().fg(Color::LightRed))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(widget, area);
        return;
    }

    if review.tasks.is_empty() {
        let widget = Paragraph::new("No tasks uploaded yet.")
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(widget, area);
        return;
    }

    let is_manager = review.role.is_manager();
    let mut header_cells = vec![Cell::from("Title")];
    if is_manager {
        header_cells.push(Cell::from("Employee"));
    }
    header_cells.extend([
        Cell::from("Link"),
        Cell::from("Department"),
        Cell::from("Status"),
        Cell::from("Comment"),
    ]);
    let header = Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD));

    let mut rows = Vec::new();
    let mut flat_index = 0usize;
    for (key, tasks) in review.grouped() {
        rows.push(Row::new(vec![
            Cell::from(group_title(&key, review.group_by)).style(header_style()),
        ]));
        for task in tasks {
            let row_style = if flat_index == selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };

            let mut cells = vec![Cell::from(task.title.clone())];
            if is_manager {
                cells.push(Cell::from(task.employee_name().to_string()));
            }
            cells.push(Cell::from(task.link_url.clone()));
            cells.push(Cell::from(task.department_name.clone()));
            cells.push(Cell::from(task.status.label()).style(status_style(task.status)));
            cells.push(Cell::from(
                task.comment.clone().unwrap_or_else(|| "-".to_string()),
            ));

            rows.push(Row::new(cells).style(row_style));
            flat_index += 1;
        }
    }

    let widths: Vec<Constraint> = if is_manager {
        vec![
            Constraint::Percentage(22),
            Constraint::Percentage(12),
            Constraint::Percentage(26),
            Constraint::Percentage(12),
            Constraint::Percentage(10),
            Constraint::Percentage(18),
        ]
    } else {
        vec![
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(15),
            Constraint::Percentage(10),
            Constraint::Percentage(20),
        ]
    };

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
