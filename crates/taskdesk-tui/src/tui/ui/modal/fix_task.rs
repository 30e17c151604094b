/*
[INPUT]:  Corrected link state pre-filled from the rejected task
[OUTPUT]: Fix modal rendering state and the resubmitted link
[POS]:    TUI UI modal - employee fix for a rejected task
[UPDATE]: When the fix flow changes
*/

use crossterm::event::KeyCode;

use super::{handle_modal_key, Field, Modal, ModalAction};

pub(in crate::tui) struct FixModal {
    task_id: String,
    link_url: String,
    focus_index: usize,
}

impl FixModal {
    /// The link field starts pre-filled with the task's current link
    pub(in crate::tui) fn new(task_id: String, link_url: String) -> Self {
        Self {
            task_id,
            link_url,
            focus_index: 0,
        }
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: String::from("Fix Task"),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("Link URL"),
                    value: self.link_url.clone(),
                    secret: false,
                },
                Field::Button {
                    label: String::from("Save"),
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

    pub(in crate::tui) fn link_url(&self) -> &str {
        self.link_url.as_str()
    }

    fn apply_modal_state(&mut self, modal: &Modal) {
        self.focus_index = modal.focus_index;
        if let Some(Field::TextInput { value, .. }) = modal.fields.first() {
            self.link_url = value.clone();
        }
    }
}
