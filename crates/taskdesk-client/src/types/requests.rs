/*
[INPUT]:  Form data and review-workflow parameters
[OUTPUT]: Serializable request bodies and query builders
[POS]:    Data layer - request types for API communication
[UPDATE]: When request schemas or query parameters change
*/

use serde::Serialize;

use super::enums::TaskStatus;

/// Default page size requested before the server confirms its own
pub const DEFAULT_PAGE_LIMIT: u32 = 5;

/// Body for POST /auth/login
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for POST /auth/register
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department_id: String,
}

/// Body for POST /task (employee submission)
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub title: String,
    pub link_url: String,
    pub department_id: String,
}

/// Body for the manager review PATCH endpoints.
///
/// Accept always carries an explicit `"comment": null`; reject carries the
/// mandatory comment.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewDecision {
    pub status: TaskStatus,
    pub comment: Option<String>,
}

impl ReviewDecision {
    pub fn accept() -> Self {
        Self {
            status: TaskStatus::Accepted,
            comment: None,
        }
    }

    pub fn reject(comment: impl Into<String>) -> Self {
        Self {
            status: TaskStatus::Rejected,
            comment: Some(comment.into()),
        }
    }
}

/// Body for PATCH /fixTask/:id (employee resubmission)
#[derive(Debug, Clone, Serialize)]
pub struct FixTask {
    pub link_url: String,
}

/// Query parameters for the paginated task list endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct TaskQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub department: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for TaskQuery {
    fn default() -> Self {
        Self {
            year: None,
            month: None,
            department: None,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl TaskQuery {
    /// Render the query string; filters are omitted when unset, page and
    /// limit are always present.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(year) = self.year {
            params.push(format!("year={year}"));
        }
        if let Some(month) = self.month {
            params.push(format!("month={month}"));
        }
        if let Some(department) = self.department.as_deref() {
            params.push(format!("department={department}"));
        }
        params.push(format!("page={}", self.page));
        params.push(format!("limit={}", self.limit));
        params.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn accept_decision_serializes_null_comment() {
        let body = serde_json::to_value(ReviewDecision::accept()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "status": "Accept", "comment": null })
        );
    }

    #[test]
    fn reject_decision_carries_comment() {
        let body = serde_json::to_value(ReviewDecision::reject("missing attachment")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "status": "Reject", "comment": "missing attachment" })
        );
    }

    #[rstest]
    #[case(TaskQuery::default(), "page=1&limit=5")]
    #[case(
        TaskQuery { year: Some(2024), ..TaskQuery::default() },
        "year=2024&page=1&limit=5"
    )]
    #[case(
        TaskQuery { year: Some(2024), month: Some(3), page: 2, limit: 10, ..TaskQuery::default() },
        "year=2024&month=3&page=2&limit=10"
    )]
    #[case(
        TaskQuery { department: Some("Sales".to_string()), page: 4, ..TaskQuery::default() },
        "department=Sales&page=4&limit=5"
    )]
    fn query_string_includes_only_set_filters(#[case] query: TaskQuery, #[case] expected: &str) {
        assert_eq!(query.to_query_string(), expected);
    }
}
