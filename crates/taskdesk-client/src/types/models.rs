/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{Role, TaskStatus};

/// Employee summary attached to a task in manager views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
}

/// A unit of work submitted for review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub link_url: String,
    pub department_name: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Employee>,
}

impl Task {
    /// Employee name for manager views; tasks fetched through the
    /// self-scoped endpoint carry no employee record.
    pub fn employee_name(&self) -> &str {
        self.employee
            .as_ref()
            .map(|employee| employee.name.as_str())
            .unwrap_or("N/A")
    }
}

/// Current user resolved from GET /auth/me
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department_name: String,
    pub department_id: String,
}

impl UserProfile {
    /// Role is derived from the department designation, not a dedicated
    /// backend field.
    pub fn role(&self) -> Role {
        if self.department_name == "Manager" {
            Role::Manager
        } else {
            Role::Employee
        }
    }
}

/// Department option for the registration form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
}

/// Distinct filter values available to the current role.
///
/// Fetched once per role; failure leaves the dropdowns empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterVocabulary {
    #[serde(default)]
    pub years: Vec<i32>,
    #[serde(default)]
    pub months: Vec<u32>,
    #[serde(default)]
    pub departments: Vec<String>,
}

/// One page of the task list as confirmed by the backend.
///
/// `data` is required; a response without a task array is malformed and
/// must surface as an invalid-response error, never as a partial page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPage {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(rename = "totalTasks", default)]
    pub total_tasks: u64,
    #[serde(rename = "totalPages", default = "default_page")]
    pub total_pages: u32,
    pub data: Vec<Task>,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}
