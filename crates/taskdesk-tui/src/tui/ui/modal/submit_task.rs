/*
[INPUT]:  Task submission form state and key events
[OUTPUT]: Upload modal rendering state and submitted title/link
[POS]:    TUI UI modal - employee task upload
[UPDATE]: When the upload form fields change
*/

use crossterm::event::KeyCode;

use super::{handle_modal_key, Field, Modal, ModalAction};

pub(in crate::tui) struct SubmitTaskModal {
    department_name: String,
    title: String,
    link_url: String,
    focus_index: usize,
}

impl SubmitTaskModal {
    pub(in crate::tui) fn new(department_name: String) -> Self {
        Self {
            department_name,
            title: String::new(),
            link_url: String::new(),
            focus_index: 0,
        }
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: format!("Upload Task ({})", self.department_name),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("Title"),
                    value: self.title.clone(),
                    secret: false,
                },
                Field::TextInput {
                    label: String::from("Link URL"),
                    value: self.link_url.clone(),
                    secret: false,
                },
                Field::Button {
                    label: String::from("Upload"),
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

    pub(in crate::tui) fn title(&self) -> &str {
        self.title.as_str()
    }

    pub(in crate::tui) fn link_url(&self) -> &str {
        self.link_url.as_str()
    }

    fn apply_modal_state(&mut self, modal: &Modal) {
        self.focus_index = modal.focus_index;
        if let Some(Field::TextInput { value, .. }) = modal.fields.first() {
            self.title = value.clone();
        }
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(1) {
            self.link_url = value.clone();
        }
    }
}
