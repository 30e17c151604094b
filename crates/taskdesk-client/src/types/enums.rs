/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Review status of a submitted task.
///
/// The backend stores an open string set ("Menunggu"/"Accept"/"Reject");
/// the client maps it to a closed enum at the boundary and fails
/// deserialization on unknown values instead of defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Menunggu")]
    Pending,
    #[serde(rename = "Accept")]
    Accepted,
    #[serde(rename = "Reject")]
    Rejected,
}

impl TaskStatus {
    /// Display label for UI surfaces
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Accepted => "Accepted",
            TaskStatus::Rejected => "Rejected",
        }
    }
}

/// Portal role derived from the user's department at login.
///
/// Managers review all tasks and never submit; employees submit and see
/// only their own tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Manager,
    Employee,
}

impl Role {
    pub fn is_manager(&self) -> bool {
        matches!(self, Role::Manager)
    }
}
