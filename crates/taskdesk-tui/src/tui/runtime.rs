/*
[INPUT]:  Portal client, stored session, log buffer, and fetch results
[OUTPUT]: Ratatui-based TUI run loop, rendering, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or the fetch protocol
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::Event as CrosstermEvent;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::warn;
use tracing_subscriber::fmt::MakeWriter;

use taskdesk_client::{PortalClient, SessionToken, TaskStatus};
use taskdesk_tui::PortalConfig;

use super::app::{ActiveModal, AppState, Screen, Tab};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::modal::draw_modal;
use super::ui::{auth, filters, logs, pagination, submit, tabs, task_table};
use crate::session::SessionStore;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk = String::from_utf8_lossy(buf);
        self.partial.push_str(&chunk);
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial = self.partial[pos + 1..].to_string();
            let buffer = self.buffer.clone();
            let mut guard = buffer.lock().expect("log buffer lock");
            guard.push_line(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            let buffer = self.buffer.clone();
            let mut guard = buffer.lock().expect("log buffer lock");
            guard.push_line(line);
        }
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

enum UiEvent {
    Input(CrosstermEvent),
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn status_style(status: TaskStatus) -> Style {
    match status {
        TaskStatus::Pending => Style::default().fg(Color::LightBlue),
        TaskStatus::Accepted => Style::default().fg(Color::LightGreen),
        TaskStatus::Rejected => Style::default().fg(Color::LightRed),
    }
}

pub async fn run_tui(config: PortalConfig, log_buffer: LogBufferHandle) -> Result<()> {
    let session_store = SessionStore::default_store();
    let mut client = PortalClient::with_config(config.client_config(), &config.base_url)
        .map_err(|err| anyhow!("create portal client failed: {err}"))?;

    // Session gate: a stored token is only trusted after /auth/me
    // confirms it; anything else lands on the login screen.
    let mut initial_profile = None;
    if let Some(session) = session_store.load() {
        if session.base_url == config.base_url {
            client.set_session(SessionToken::new(session.access_token));
            match client.me().await {
                Ok(profile) => initial_profile = Some(profile),
                Err(err) => {
                    warn!(error = %err, "stored session rejected");
                    client.clear_session();
                    if let Err(err) = session_store.clear() {
                        warn!(error = %err, "failed to clear stored session");
                    }
                }
            }
        }
    }

    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = event_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let mut app = AppState::new(client, session_store, config, log_buffer, fetch_tx);
    match initial_profile {
        Some(profile) => app.enter_dashboard(profile),
        None => {
            app.status_message =
                "press [l] to sign in or [n] to create an account".to_string();
        }
    }

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_outcome = fetch_rx.recv() => {
                if let Some(outcome) = maybe_outcome {
                    app.handle_fetch_outcome(outcome);
                }
            }
            maybe_event = event_rx.recv() => {
                if let Some(UiEvent::Input(CrosstermEvent::Key(key))) = maybe_event {
                    if handle_key_event(&mut app, key.code).await {
                        should_quit = true;
                    }
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &app))?;
    }

    input_shutdown.cancel();
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &AppState) {
    let area = frame.area();

    match app.screen {
        Screen::Login => {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(8), Constraint::Length(4)])
                .split(area);
            auth::draw_login_screen(frame, layout[0]);
            draw_footer(frame, layout[1], app);
        }
        Screen::Dashboard => {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(10),
                    Constraint::Length(3),
                    Constraint::Length(4),
                ])
                .split(area);

            match app.current_tab {
                Tab::Tasks => {
                    let content = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([
                            Constraint::Length(3),
                            Constraint::Min(5),
                            Constraint::Length(3),
                        ])
                        .split(layout[0]);
                    if let Some(review) = app.review.as_ref() {
                        filters::draw_filter_bar(frame, content[0], review);
                        task_table::draw_task_table(frame, content[1], review, app.selected);
                        pagination::draw_pagination(frame, content[2], &review.pager);
                    }
                }
                Tab::Submit => {
                    if let Some(user) = app.user.as_ref() {
                        submit::draw_submit_view(frame, layout[0], user);
                    }
                }
                Tab::Logs => {
                    logs::draw_logs(frame, layout[0], &app.log_buffer);
                }
            }

            tabs::draw_tabs(frame, layout[1], &app.tabs(), app.current_tab);
            draw_footer(frame, layout[2], app);
        }
    }

    if let Some(active_modal) = app.active_modal.as_ref() {
        let modal = match active_modal {
            ActiveModal::Login(modal) => modal.to_modal(),
            ActiveModal::Register(modal) => modal.to_modal(),
            ActiveModal::SubmitTask(modal) => modal.to_modal(),
            ActiveModal::Reject(modal) => modal.to_modal(),
            ActiveModal::Fix(modal) => modal.to_modal(),
        };
        let modal_area = centered_rect(area, 60, 50);
        draw_modal(frame, modal_area, &modal);
    }
}

fn draw_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let line1 = match app.screen {
        Screen::Login => Line::from(vec![
            Span::styled("[l]", key_style),
            Span::raw(" Sign in  "),
            Span::styled("[n]", key_style),
            Span::raw(" Register  "),
            Span::styled("[q]", key_style),
            Span::raw(" Quit"),
        ]),
        Screen::Dashboard => Line::from(vec![
            Span::styled("[Up/Down]", key_style),
            Span::raw(" Select  "),
            Span::styled("[Left/Right]", key_style),
            Span::raw(" Page  "),
            Span::styled("[y/m/d]", key_style),
            Span::raw(" Filters  "),
            Span::styled("[g]", key_style),
            Span::raw(" Group  "),
            Span::styled("[s]", key_style),
            Span::raw(" Sort  "),
            Span::styled("[+/-]", key_style),
            Span::raw(" Limit"),
        ]),
    };

    let mut action_spans = Vec::new();
    if app.screen == Screen::Dashboard {
        if app.role().map(|role| role.is_manager()).unwrap_or(false) {
            action_spans.extend([
                Span::styled("[a]", key_style),
                Span::raw(" Accept  "),
                Span::styled("[x]", key_style),
                Span::raw(" Reject  "),
            ]);
        } else {
            action_spans.extend([
                Span::styled("[u]", key_style),
                Span::raw(" Upload  "),
                Span::styled("[e]", key_style),
                Span::raw(" Fix  "),
            ]);
        }
        action_spans.extend([
            Span::styled("[r]", key_style),
            Span::raw(" Refresh  "),
            Span::styled("[o]", key_style),
            Span::raw(" Sign out  "),
            Span::styled("[q]", key_style),
            Span::raw(" Quit  "),
        ]);
    }
    action_spans.push(Span::raw(format!("Status: {}", app.status_message)));
    let line2 = Line::from(action_spans);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn centered_rect(
    area: ratatui::layout::Rect,
    percent_x: u16,
    percent_y: u16,
) -> ratatui::layout::Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
