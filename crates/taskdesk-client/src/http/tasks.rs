/*
[INPUT]:  Filter/pagination queries and review decisions
[OUTPUT]: Task pages, filter vocabulary, and review mutations
[POS]:    HTTP layer - task endpoints (require session cookie)
[UPDATE]: When adding new task endpoints or changing query parameters
*/

use reqwest::{Method, StatusCode};
use tracing::debug;

use super::client::PortalClient;
use super::error::{PortalError, Result};
use crate::types::{
    FilterVocabulary, FixTask, NewTask, ReviewDecision, Role, TaskPage, TaskQuery,
};

impl PortalClient {
    /// Fetch the distinct years, months, and departments available for
    /// filtering, scoped to the caller's role.
    ///
    /// GET /dateTask (manager) | GET /myDateTask (employee)
    pub async fn filter_vocabulary(&self, role: Role) -> Result<FilterVocabulary> {
        let endpoint = match role {
            Role::Manager => "/dateTask",
            Role::Employee => "/myDateTask",
        };
        let builder = self.request_with_session(Method::GET, endpoint)?;
        self.send_json(builder).await
    }

    /// Fetch one page of the task list; managers see all tasks, employees
    /// only their own.
    ///
    /// GET /task?year&month&department&page&limit | GET /myTask?...
    pub async fn list_tasks(&self, role: Role, query: &TaskQuery) -> Result<TaskPage> {
        let base = match role {
            Role::Manager => "/task",
            Role::Employee => "/myTask",
        };
        let endpoint = format!("{}?{}", base, query.to_query_string());
        debug!(endpoint = %endpoint, "fetching task page");

        let builder = self.request_with_session(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Submit a new task for review; the backend answers 201 on success
    ///
    /// POST /task
    pub async fn submit_task(&self, task: &NewTask) -> Result<()> {
        let builder = self.request_with_session(Method::POST, "/task")?.json(task);
        let response = self.send_raw(builder).await?;
        if response.status() != StatusCode::CREATED {
            return Err(PortalError::InvalidResponse(format!(
                "expected 201 Created, got {}",
                response.status()
            )));
        }
        Ok(())
    }

    /// Approve a task; the comment is explicitly cleared
    ///
    /// PATCH /task/:id/accept
    pub async fn accept_task(&self, task_id: &str) -> Result<()> {
        let endpoint = format!("/task/{task_id}/accept");
        let builder = self
            .request_with_session(Method::PATCH, &endpoint)?
            .json(&ReviewDecision::accept());
        self.send_unit(builder).await
    }

    /// Reject a task with a mandatory comment.
    ///
    /// An empty or whitespace-only comment is refused before any network
    /// call is made.
    ///
    /// PATCH /task/:id/reject
    pub async fn reject_task(&self, task_id: &str, comment: &str) -> Result<()> {
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(PortalError::Validation(
                "a rejection comment is required".to_string(),
            ));
        }

        let endpoint = format!("/task/{task_id}/reject");
        let builder = self
            .request_with_session(Method::PATCH, &endpoint)?
            .json(&ReviewDecision::reject(comment));
        self.send_unit(builder).await
    }

    /// Resubmit a corrected link for a rejected task
    ///
    /// PATCH /fixTask/:id
    pub async fn fix_task(&self, task_id: &str, link_url: &str) -> Result<()> {
        let endpoint = format!("/fixTask/{task_id}");
        let builder = self
            .request_with_session(Method::PATCH, &endpoint)?
            .json(&FixTask {
                link_url: link_url.to_string(),
            });
        self.send_unit(builder).await
    }
}
