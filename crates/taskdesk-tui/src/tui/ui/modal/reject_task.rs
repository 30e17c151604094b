/*
[INPUT]:  Rejection comment state and key events
[OUTPUT]: Reject modal rendering state and the submitted comment
[POS]:    TUI UI modal - manager rejection with mandatory comment
[UPDATE]: When the rejection flow changes
*/

use crossterm::event::KeyCode;

use super::{handle_modal_key, Field, Modal, ModalAction};

pub(in crate::tui) struct RejectModal {
    task_id: String,
    task_title: String,
    comment: String,
    focus_index: usize,
}

impl RejectModal {
    pub(in crate::tui) fn new(task_id: String, task_title: String) -> Self {
        Self {
            task_id,
            task_title,
            comment: String::new(),
            focus_index: 0,
        }
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: format!("Reject: {}", self.task_title),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("Reason"),
                    value: self.comment.clone(),
                    secret: false,
                },
                Field::Button {
                    label: String::from("Send"),
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

    pub(in crate::tui) fn task_id(&self) -> &str {
        self.task_id.as_str()
    }

    pub(in crate::tui) fn comment(&self) -> &str {
        self.comment.as_str()
    }

    fn apply_modal_state(&mut self, modal: &Modal) {
        self.focus_index = modal.focus_index;
        if let Some(Field::TextInput { value, .. }) = modal.fields.first() {
            self.comment = value.clone();
        }
    }
}
