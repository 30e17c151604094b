/*
[INPUT]:  Filter/sort/group selections, fetch results, review guards
[OUTPUT]: ReviewState with pure transitions for the task-list workflow
[POS]:    Review workflow - state machine driving the task list view
[UPDATE]: When filters, fetch handling, or review guards change
*/

use std::fmt;

use taskdesk_client::{
    FilterVocabulary, PortalError, Role, Task, TaskPage, TaskQuery, TaskStatus,
};

use crate::grouping::{group_tasks, sort_tasks, GroupBy, SortOrder};
use crate::paging::Pager;

/// Identifies one dispatched page fetch.
///
/// Only the ticket from the newest `begin_fetch` may apply its result;
/// a slow earlier fetch resolving late is discarded instead of
/// overwriting fresher data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Error shown in place of the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Transport or backend failure while fetching
    Fetch(String),
    /// Response arrived but its shape was malformed
    InvalidPage(String),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Fetch(message) => write!(f, "{message}"),
            ListError::InvalidPage(message) => write!(f, "invalid task list response: {message}"),
        }
    }
}

/// State behind the task list view.
///
/// The displayed list is always a function of (filters, page, limit) as
/// last confirmed by the backend; mutations never touch it directly and
/// instead trigger a re-fetch.
#[derive(Debug, Clone)]
pub struct ReviewState {
    pub role: Role,
    pub selected_year: Option<i32>,
    pub selected_month: Option<u32>,
    pub selected_department: Option<String>,
    pub group_by: GroupBy,
    pub sort_order: SortOrder,
    pub pager: Pager,
    pub tasks: Vec<Task>,
    pub vocabulary: Option<FilterVocabulary>,
    pub vocabulary_error: Option<String>,
    pub loading: bool,
    pub error: Option<ListError>,
    generation: u64,
}

impl ReviewState {
    pub fn new(role: Role, limit: u32) -> Self {
        Self {
            role,
            selected_year: None,
            selected_month: None,
            selected_department: None,
            group_by: GroupBy::default(),
            sort_order: SortOrder::default(),
            pager: Pager::new(limit),
            tasks: Vec::new(),
            vocabulary: None,
            vocabulary_error: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    /// Query matching the current filters, page, and limit
    pub fn query(&self) -> TaskQuery {
        TaskQuery {
            year: self.selected_year,
            month: self.selected_month,
            department: self.selected_department.clone(),
            page: self.pager.current_page,
            limit: self.pager.limit,
        }
    }

    /// Change the year filter; any filter change returns to page 1
    pub fn set_year(&mut self, year: Option<i32>) {
        self.selected_year = year;
        self.pager.reset();
    }

    pub fn set_month(&mut self, month: Option<u32>) {
        self.selected_month = month;
        self.pager.reset();
    }

    pub fn set_department(&mut self, department: Option<String>) {
        self.selected_department = department;
        self.pager.reset();
    }

    /// Display-only transition; the page slice is regrouped client-side
    pub fn cycle_group_by(&mut self) {
        self.group_by = self.group_by.cycled();
    }

    /// Display-only transition; the page slice is resorted client-side
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    /// Start a page fetch; the returned ticket must accompany the result
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
        }
    }

    fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a fetched page; stale tickets are ignored.
    ///
    /// Returns whether the page was applied.
    pub fn apply_page(&mut self, ticket: FetchTicket, page: TaskPage) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.error = None;
        self.pager.apply(&page);
        self.tasks = page.data;
        true
    }

    /// Apply a fetch failure; stale tickets are ignored.
    ///
    /// A malformed response degrades to a single empty page with a
    /// distinct error; transport failures keep the pager untouched.
    pub fn apply_fetch_error(&mut self, ticket: FetchTicket, err: &PortalError) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.tasks.clear();
        self.error = Some(match err {
            PortalError::InvalidResponse(message) => {
                self.pager.apply_invalid();
                ListError::InvalidPage(message.clone())
            }
            other => ListError::Fetch(format!("failed to load tasks: {other}")),
        });
        true
    }

    /// Store the filter vocabulary fetched once per role
    pub fn set_vocabulary(&mut self, result: Result<FilterVocabulary, PortalError>) {
        match result {
            Ok(vocabulary) => {
                self.vocabulary = Some(vocabulary);
                self.vocabulary_error = None;
            }
            Err(err) => {
                self.vocabulary = None;
                self.vocabulary_error = Some(format!("failed to load filters: {err}"));
            }
        }
    }

    /// Accept/Reject controls exist only for managers
    pub fn can_review(&self) -> bool {
        self.role.is_manager()
    }

    /// Fix exists only for employees, and only on rejected tasks
    pub fn can_fix(&self, task: &Task) -> bool {
        self.role == Role::Employee && task.status == TaskStatus::Rejected
    }

    /// Current page sorted and partitioned for display
    pub fn grouped(&self) -> Vec<(String, Vec<Task>)> {
        let sorted = sort_tasks(&self.tasks, self.sort_order);
        group_tasks(sorted, self.group_by, self.sort_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {id}"),
            link_url: "https://docs.example.com".to_string(),
            department_name: "Sales".to_string(),
            status,
            comment: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap(),
            employee: None,
        }
    }

    fn page_with(tasks: Vec<Task>) -> TaskPage {
        TaskPage {
            page: 1,
            limit: 5,
            total_tasks: tasks.len() as u64,
            total_pages: 1,
            data: tasks,
        }
    }

    #[test]
    fn filter_changes_reset_the_page() {
        let mut state = ReviewState::new(Role::Manager, 5);
        state.pager.total_pages = 6;
        state.pager.set_page(4);

        state.set_year(Some(2024));
        assert_eq!(state.pager.current_page, 1);

        state.pager.set_page(3);
        state.set_month(Some(7));
        assert_eq!(state.pager.current_page, 1);

        state.pager.set_page(2);
        state.set_department(Some("Sales".to_string()));
        assert_eq!(state.pager.current_page, 1);
        assert_eq!(state.query().department.as_deref(), Some("Sales"));
    }

    #[test]
    fn stale_fetch_results_are_discarded() {
        let mut state = ReviewState::new(Role::Manager, 5);

        let slow = state.begin_fetch();
        let fresh = state.begin_fetch();

        assert!(state.apply_page(fresh, page_with(vec![task("new", TaskStatus::Pending)])));
        assert!(!state.apply_page(slow, page_with(vec![task("old", TaskStatus::Pending)])));

        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].id, "new");
    }

    #[test]
    fn stale_fetch_errors_are_discarded_too() {
        let mut state = ReviewState::new(Role::Manager, 5);

        let slow = state.begin_fetch();
        let fresh = state.begin_fetch();
        assert!(state.apply_page(fresh, page_with(vec![task("new", TaskStatus::Pending)])));

        let err = PortalError::InvalidResponse("data is not an array".to_string());
        assert!(!state.apply_fetch_error(slow, &err));
        assert!(state.error.is_none());
        assert_eq!(state.tasks.len(), 1);
    }

    #[test]
    fn malformed_page_degrades_to_empty_single_page() {
        let mut state = ReviewState::new(Role::Manager, 5);
        state.pager.total_pages = 9;
        state.pager.set_page(7);
        state.tasks = vec![task("stale", TaskStatus::Pending)];

        let ticket = state.begin_fetch();
        let err = PortalError::InvalidResponse("data is not an array".to_string());
        assert!(state.apply_fetch_error(ticket, &err));

        assert!(state.tasks.is_empty());
        assert_eq!(state.pager.total_pages, 1);
        assert!(matches!(state.error, Some(ListError::InvalidPage(_))));
    }

    #[test]
    fn transport_failure_keeps_the_pager_but_shows_fetch_error() {
        let mut state = ReviewState::new(Role::Manager, 5);
        state.pager.total_pages = 4;
        state.pager.set_page(3);

        let ticket = state.begin_fetch();
        let err = PortalError::Config("connection refused".to_string());
        assert!(state.apply_fetch_error(ticket, &err));

        assert_eq!(state.pager.total_pages, 4);
        assert_eq!(state.pager.current_page, 3);
        assert!(matches!(state.error, Some(ListError::Fetch(_))));
    }

    #[test]
    fn applied_page_overwrites_limit_with_server_value() {
        let mut state = ReviewState::new(Role::Employee, 5);
        let ticket = state.begin_fetch();

        let mut page = page_with(vec![task("a", TaskStatus::Pending)]);
        page.limit = 10;
        page.total_pages = 2;
        assert!(state.apply_page(ticket, page));

        assert_eq!(state.pager.limit, 10);
        assert_eq!(state.query().limit, 10);
        assert!(!state.loading);
    }

    #[test]
    fn review_and_fix_guards_depend_on_role_and_status() {
        let manager = ReviewState::new(Role::Manager, 5);
        let employee = ReviewState::new(Role::Employee, 5);

        assert!(manager.can_review());
        assert!(!employee.can_review());

        let rejected = task("r", TaskStatus::Rejected);
        let pending = task("p", TaskStatus::Pending);
        assert!(employee.can_fix(&rejected));
        assert!(!employee.can_fix(&pending));
        assert!(!manager.can_fix(&rejected));
    }

    #[test]
    fn vocabulary_failure_leaves_dropdowns_empty_with_message() {
        let mut state = ReviewState::new(Role::Manager, 5);
        state.set_vocabulary(Err(PortalError::Config("boom".to_string())));

        assert!(state.vocabulary.is_none());
        assert!(state.vocabulary_error.is_some());

        state.set_vocabulary(Ok(FilterVocabulary {
            years: vec![2024],
            months: vec![3],
            departments: vec!["Sales".to_string()],
        }));
        assert!(state.vocabulary_error.is_none());
        assert_eq!(state.vocabulary.as_ref().unwrap().years, vec![2024]);
    }
}
