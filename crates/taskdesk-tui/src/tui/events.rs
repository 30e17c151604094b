/*
[INPUT]:  Crossterm key events and modal actions
[OUTPUT]: TUI event routing for screens and modal forms
[POS]:    TUI event handling
[UPDATE]: When hotkeys, modal validation, or submit flows change
*/

use crossterm::event::KeyCode;

use super::app::{ActiveModal, AppState, Screen};
use super::ui::modal::ModalAction;

enum ModalSubmit {
    Login {
        email: String,
        password: String,
    },
    Register {
        name: String,
        email: String,
        password: String,
        department_id: String,
    },
    SubmitTask {
        title: String,
        link_url: String,
    },
    Reject {
        task_id: String,
        comment: String,
    },
    Fix {
        task_id: String,
        link_url: String,
    },
}

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) async fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    if app.active_modal.is_some() {
        return handle_modal_key_event(app, key).await;
    }

    match app.screen {
        Screen::Login => handle_login_key(app, key).await,
        Screen::Dashboard => handle_dashboard_key(app, key).await,
    }
}

async fn handle_login_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => true,
        KeyCode::Char('l') | KeyCode::Enter => {
            app.open_login_modal();
            false
        }
        KeyCode::Char('n') => {
            app.open_register_modal().await;
            false
        }
        _ => false,
    }
}

async fn handle_dashboard_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => true,
        KeyCode::Char('o') => {
            app.logout().await;
            false
        }
        KeyCode::Tab => {
            app.next_tab();
            false
        }
        KeyCode::Char('1') => {
            app.set_tab_index(0);
            false
        }
        KeyCode::Char('2') => {
            app.set_tab_index(1);
            false
        }
        KeyCode::Char('3') => {
            app.set_tab_index(2);
            false
        }
        KeyCode::Char('r') => {
            app.refresh();
            false
        }
        KeyCode::Char('u') => {
            app.open_submit_modal();
            false
        }
        KeyCode::Up => {
            app.move_selection(-1);
            false
        }
        KeyCode::Down => {
            app.move_selection(1);
            false
        }
        KeyCode::Left => {
            app.page_previous();
            false
        }
        KeyCode::Right => {
            app.page_next();
            false
        }
        KeyCode::Char('y') => {
            app.cycle_year();
            false
        }
        KeyCode::Char('m') => {
            app.cycle_month();
            false
        }
        KeyCode::Char('d') => {
            app.cycle_department();
            false
        }
        KeyCode::Char('g') => {
            app.cycle_group();
            false
        }
        KeyCode::Char('s') => {
            app.toggle_sort();
            false
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.change_limit(5);
            false
        }
        KeyCode::Char('-') => {
            app.change_limit(-5);
            false
        }
        KeyCode::Char('a') => {
            app.accept_selected().await;
            false
        }
        KeyCode::Char('x') => {
            app.open_reject_modal();
            false
        }
        KeyCode::Char('e') => {
            app.open_fix_modal();
            false
        }
        _ => false,
    }
}

async fn handle_modal_key_event(app: &mut AppState, key: KeyCode) -> bool {
    let mut status_update = None;
    let (action, submit) = match app.active_modal_mut() {
        Some(ActiveModal::Login(modal)) => {
            let action = modal.handle_key(key);
            let mut submit = None;
            if action == ModalAction::Submit {
                if modal.email().trim().is_empty() || modal.password().is_empty() {
                    status_update = Some("email and password are required".to_string());
                } else {
                    submit = Some(ModalSubmit::Login {
                        email: modal.email().trim().to_string(),
                        password: modal.password().to_string(),
                    });
                }
            }
            (action, submit)
        }
        Some(ActiveModal::Register(modal)) => {
            let action = modal.handle_key(key);
            let mut submit = None;
            if action == ModalAction::Submit {
                if modal.name().trim().is_empty()
                    || modal.email().trim().is_empty()
                    || modal.password().is_empty()
                {
                    status_update = Some("name, email, and password are required".to_string());
                } else if let Some(department_id) = modal.selected_department_id() {
                    submit = Some(ModalSubmit::Register {
                        name: modal.name().trim().to_string(),
                        email: modal.email().trim().to_string(),
                        password: modal.password().to_string(),
                        department_id: department_id.to_string(),
                    });
                } else {
                    status_update = Some("select a department".to_string());
                }
            }
            (action, submit)
        }
        Some(ActiveModal::SubmitTask(modal)) => {
            let action = modal.handle_key(key);
            let mut submit = None;
            if action == ModalAction::Submit {
                if modal.title().trim().is_empty() || modal.link_url().trim().is_empty() {
                    status_update = Some("title and link URL are required".to_string());
                } else {
                    submit = Some(ModalSubmit::SubmitTask {
                        title: modal.title().trim().to_string(),
                        link_url: modal.link_url().trim().to_string(),
                    });
                }
            }
            (action, submit)
        }
        Some(ActiveModal::Reject(modal)) => {
            let action = modal.handle_key(key);
            let mut submit = None;
            if action == ModalAction::Submit {
                // Blocked here, before any network call is made.
                if modal.comment().trim().is_empty() {
                    status_update =
                        Some("a rejection comment is required before sending".to_string());
                } else {
                    submit = Some(ModalSubmit::Reject {
                        task_id: modal.task_id().to_string(),
                        comment: modal.comment().trim().to_string(),
                    });
                }
            }
            (action, submit)
        }
        Some(ActiveModal::Fix(modal)) => {
            let action = modal.handle_key(key);
            let mut submit = None;
            if action == ModalAction::Submit {
                if modal.link_url().trim().is_empty() {
                    status_update = Some("a corrected link URL is required".to_string());
                } else {
                    submit = Some(ModalSubmit::Fix {
                        task_id: modal.task_id().to_string(),
                        link_url: modal.link_url().trim().to_string(),
                    });
                }
            }
            (action, submit)
        }
        None => return false,
    };

    if let Some(status) = status_update {
        app.status_message = status;
    }

    if action == ModalAction::Cancel {
        app.close_modal();
        return false;
    }

    if let Some(submit) = submit {
        let (label, result) = match submit {
            ModalSubmit::Login { email, password } => {
                ("sign in", app.submit_login(email, password).await)
            }
            ModalSubmit::Register {
                name,
                email,
                password,
                department_id,
            } => (
                "registration",
                app.submit_register(name, email, password, department_id).await,
            ),
            ModalSubmit::SubmitTask { title, link_url } => {
                ("upload task", app.submit_new_task(title, link_url).await)
            }
            ModalSubmit::Reject { task_id, comment } => {
                ("reject task", app.submit_reject(task_id, comment).await)
            }
            ModalSubmit::Fix { task_id, link_url } => {
                ("fix task", app.submit_fix(task_id, link_url).await)
            }
        };

        match result {
            Ok(()) => app.close_modal(),
            Err(err) if err.is_auth_error() => {
                app.drop_to_login("session expired, please sign in again");
            }
            // The modal stays open so the input is not lost.
            Err(err) => app.status_message = format!("{label} failed: {err}"),
        }
    }

    false
}
