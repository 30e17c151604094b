/*
[INPUT]:  Registration form state, department options, and key events
[OUTPUT]: Registration modal rendering state and submitted form
[POS]:    TUI UI modal - account registration
[UPDATE]: When the registration form fields change
*/

use crossterm::event::KeyCode;

use super::{handle_modal_key, Field, Modal, ModalAction};

pub(in crate::tui) struct RegisterModal {
    name: String,
    email: String,
    password: String,
    department_index: usize,
    focus_index: usize,
    department_ids: Vec<String>,
    department_labels: Vec<String>,
}

impl RegisterModal {
    pub(in crate::tui) fn new(departments: Vec<(String, String)>) -> Self {
        let (department_ids, department_labels): (Vec<String>, Vec<String>) =
            departments.into_iter().unzip();
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            department_index: 0,
            focus_index: 0,
            department_ids,
            department_labels,
        }
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: String::from("Create Account"),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("Name"),
                    value: self.name.clone(),
                    secret: false,
                },
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
                Field::Select {
                    label: String::from("Department"),
                    options: self.department_labels.clone(),
                    selected: self.department_index,
                },
                Field::Button {
                    label: String::from("Register"),
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

    pub(in crate::tui) fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(in crate::tui) fn email(&self) -> &str {
        self.email.as_str()
    }

    pub(in crate::tui) fn password(&self) -> &str {
        self.password.as_str()
    }

    pub(in crate::tui) fn selected_department_id(&self) -> Option<&str> {
        self.department_ids
            .get(self.department_index)
            .map(String::as_str)
    }

    fn apply_modal_state(&mut self, modal: &Modal) {
        self.focus_index = modal.focus_index;
        if let Some(Field::TextInput { value, .. }) = modal.fields.first() {
            self.name = value.clone();
        }
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(1) {
            self.email = value.clone();
        }
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(2) {
            self.password = value.clone();
        }
        if let Some(Field::Select { selected, .. }) = modal.fields.get(3) {
            self.department_index = *selected;
        }
    }
}
