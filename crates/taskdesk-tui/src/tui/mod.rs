/*
[INPUT]:  Portal client, configuration, stored session, log buffer
[OUTPUT]: Ratatui-based TUI for the task review workflow
[POS]:    TUI module for the taskdesk binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{run_tui, LogBuffer, LogBufferHandle, LogWriterFactory, LOG_BUFFER_CAPACITY};
