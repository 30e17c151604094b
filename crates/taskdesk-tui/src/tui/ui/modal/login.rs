/*
[INPUT]:  Credential form state and key events
[OUTPUT]: Sign-in modal rendering state and submitted credentials
[POS]:    TUI UI modal - sign in
[UPDATE]: When the login form fields change
*/

use crossterm::event::KeyCode;

use super::{handle_modal_key, Field, Modal, ModalAction};

pub(in crate::tui) struct LoginModal {
    email: String,
    password: String,
    focus_index: usize,
}

impl LoginModal {
    pub(in crate::tui) fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focus_index: 0,
        }
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: String::from("Sign In"),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("Email"),
                    value: self.email.clone(),
                    secret: false,
                },
                Field::TextInput {
                    label: String::from("Password"),
                    value: self.password.clone(),
                    secret: true,
                },
                Field::Button {
                    label: String::from("Sign In"),
                    action: ModalAction::Submit,
                },
                Field::Button {
                    label: String::from("Cancel"),
                    action: ModalAction::Cancel,
                },
            ],
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        let mut modal = self.to_modal();
        let action = handle_modal_key(&mut modal, key);
        self.apply_modal_state(&modal);
        action
    }

    pub(in crate::tui) fn email(&self) -> &str {
        self.email.as_str()
    }

    pub(in crate::tui) fn password(&self) -> &str {
        self.password.as_str()
    }

    fn apply_modal_state(&mut self, modal: &Modal) {
        self.focus_index = modal.focus_index;
        if let Some(Field::TextInput { value, .. }) = modal.fields.first() {
            self.email = value.clone();
        }
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(1) {
            self.password = value.clone();
        }
    }
}
