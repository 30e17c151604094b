/*
[INPUT]:  Portal client, session store, review state, fetch results
[OUTPUT]: AppState helpers for TUI rendering and workflow control
[POS]:    TUI app state - session gate, tabs, modals, and mutations
[UPDATE]: When screens, hotkey actions, or the fetch protocol change
*/

use tokio::sync::mpsc;
use tracing::warn;

use taskdesk_client::{
    FilterVocabulary, LoginRequest, NewTask, PortalClient, PortalError, RegisterRequest, Role,
    Task, TaskPage, UserProfile,
};
use taskdesk_tui::review::FetchTicket;
use taskdesk_tui::{PortalConfig, ReviewState};

use crate::session::{SessionStore, StoredSession};
use crate::tui::runtime::LogBufferHandle;
use crate::tui::ui::modal::{
    FixModal, LoginModal, RegisterModal, RejectModal, SubmitTaskModal,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Screen {
    Login,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Tasks,
    Submit,
    Logs,
}

impl Tab {
    pub(super) fn title(&self) -> &'static str {
        match self {
            Tab::Tasks => "Tasks",
            Tab::Submit => "Upload",
            Tab::Logs => "Logs",
        }
    }
}

/// Tabs reachable by the current role; managers never see Upload
pub(super) fn tabs_for(role: Option<Role>) -> Vec<Tab> {
    match role {
        Some(Role::Manager) => vec![Tab::Tasks, Tab::Logs],
        _ => vec![Tab::Tasks, Tab::Submit, Tab::Logs],
    }
}

pub(super) enum ActiveModal {
    Login(LoginModal),
    Register(RegisterModal),
    SubmitTask(SubmitTaskModal),
    Reject(RejectModal),
    Fix(FixModal),
}

/// Result of a background fetch, tagged so stale pages can be discarded
pub(super) enum FetchOutcome {
    Page {
        ticket: FetchTicket,
        result: Result<TaskPage, PortalError>,
    },
    Vocabulary {
        result: Result<FilterVocabulary, PortalError>,
    },
}

pub(super) struct AppState {
    pub(super) client: PortalClient,
    pub(super) session_store: SessionStore,
    pub(super) config: PortalConfig,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    pub(super) screen: Screen,
    pub(super) current_tab: Tab,
    pub(super) user: Option<UserProfile>,
    pub(super) review: Option<ReviewState>,
    pub(super) selected: usize,
    pub(super) status_message: String,
    pub(super) active_modal: Option<ActiveModal>,
}

impl AppState {
    pub(super) fn new(
        client: PortalClient,
        session_store: SessionStore,
        config: PortalConfig,
        log_buffer: LogBufferHandle,
        fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    ) -> Self {
        Self {
            client,
            session_store,
            config,
            log_buffer,
            fetch_tx,
            screen: Screen::Login,
            current_tab: Tab::Tasks,
            user: None,
            review: None,
            selected: 0,
            status_message: "Ready".to_string(),
            active_modal: None,
        }
    }

    pub(super) fn role(&self) -> Option<Role> {
        self.user.as_ref().map(UserProfile::role)
    }

    pub(super) fn tabs(&self) -> Vec<Tab> {
        tabs_for(self.role())
    }

    /// Session gate passed: build the review state for this role and
    /// kick off the vocabulary and first-page fetches.
    pub(super) fn enter_dashboard(&mut self, profile: UserProfile) {
        let role = profile.role();
        self.status_message = format!("signed in as {}", profile.name);
        self.user = Some(profile);
        self.review = Some(ReviewState::new(role, self.config.page_limit));
        self.screen = Screen::Dashboard;
        self.current_tab = Tab::Tasks;
        self.selected = 0;
        self.dispatch_vocabulary_fetch();
        self.dispatch_page_fetch();
    }

    /// The TUI equivalent of the redirect to /login
    pub(super) fn drop_to_login(&mut self, reason: impl Into<String>) {
        self.client.clear_session();
        if let Err(err) = self.session_store.clear() {
            warn!(error = %err, "failed to clear stored session");
        }
        self.user = None;
        self.review = None;
        self.active_modal = None;
        self.screen = Screen::Login;
        self.current_tab = Tab::Tasks;
        self.selected = 0;
        self.status_message = reason.into();
    }

    /// Fetch the current page in the background; the ticket makes sure
    /// only the newest dispatch may apply its result.
    pub(super) fn dispatch_page_fetch(&mut self) {
        let Some(review) = self.review.as_mut() else {
            return;
        };
        let ticket = review.begin_fetch();
        let query = review.query();
        let role = review.role;
        let client = self.client.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = client.list_tasks(role, &query).await;
            let _ = tx.send(FetchOutcome::Page { ticket, result });
        });
    }

    pub(super) fn dispatch_vocabulary_fetch(&mut self) {
        let Some(review) = self.review.as_ref() else {
            return;
        };
        let role = review.role;
        let client = self.client.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = client.filter_vocabulary(role).await;
            let _ = tx.send(FetchOutcome::Vocabulary { result });
        });
    }

    pub(super) fn handle_fetch_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Page { ticket, result } => match result {
                Ok(page) => {
                    if let Some(review) = self.review.as_mut() {
                        if review.apply_page(ticket, page) {
                            let len = review.tasks.len();
                            self.selected = if len == 0 { 0 } else { self.selected.min(len - 1) };
                        }
                    }
                }
                Err(err) if err.is_auth_error() => {
                    self.drop_to_login("session expired, please sign in again");
                }
                Err(err) => {
                    if let Some(review) = self.review.as_mut() {
                        review.apply_fetch_error(ticket, &err);
                    }
                }
            },
            FetchOutcome::Vocabulary { result } => {
                if let Some(review) = self.review.as_mut() {
                    review.set_vocabulary(result);
                }
            }
        }
    }

    /// Tasks in the order the table shows them (grouped, then row order)
    pub(super) fn visible_tasks(&self) -> Vec<Task> {
        let Some(review) = self.review.as_ref() else {
            return Vec::new();
        };
        review
            .grouped()
            .into_iter()
            .flat_map(|(_, tasks)| tasks)
            .collect()
    }

    pub(super) fn selected_task(&self) -> Option<Task> {
        self.visible_tasks().into_iter().nth(self.selected)
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let count = self.review.as_ref().map(|r| r.tasks.len()).unwrap_or(0);
        if count == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected as isize;
        self.selected = (current + delta).clamp(0, (count - 1) as isize) as usize;
    }

    pub(super) fn next_tab(&mut self) {
        let tabs = self.tabs();
        let index = tabs
            .iter()
            .position(|tab| *tab == self.current_tab)
            .unwrap_or(0);
        self.current_tab = tabs[(index + 1) % tabs.len()];
    }

    pub(super) fn set_tab_index(&mut self, index: usize) {
        if let Some(tab) = self.tabs().get(index) {
            self.current_tab = *tab;
        }
    }

    pub(super) fn refresh(&mut self) {
        let missing_vocabulary = self
            .review
            .as_ref()
            .map(|review| review.vocabulary.is_none())
            .unwrap_or(false);
        if missing_vocabulary {
            self.dispatch_vocabulary_fetch();
        }
        self.dispatch_page_fetch();
    }

    pub(super) fn cycle_year(&mut self) {
        let Some(review) = self.review.as_mut() else {
            return;
        };
        let years = review
            .vocabulary
            .as_ref()
            .map(|vocabulary| vocabulary.years.clone())
            .unwrap_or_default();
        if years.is_empty() {
            self.status_message = "no year filters available".to_string();
            return;
        }
        let next = next_option(&years, review.selected_year);
        review.set_year(next);
        self.selected = 0;
        self.dispatch_page_fetch();
    }

    pub(super) fn cycle_month(&mut self) {
        let Some(review) = self.review.as_mut() else {
            return;
        };
        let months = review
            .vocabulary
            .as_ref()
            .map(|vocabulary| vocabulary.months.clone())
            .unwrap_or_default();
        if months.is_empty() {
            self.status_message = "no month filters available".to_string();
            return;
        }
        let next = next_option(&months, review.selected_month);
        review.set_month(next);
        self.selected = 0;
        self.dispatch_page_fetch();
    }

    pub(super) fn cycle_department(&mut self) {
        let Some(review) = self.review.as_mut() else {
            return;
        };
        if !review.role.is_manager() {
            return;
        }
        let departments = review
            .vocabulary
            .as_ref()
            .map(|vocabulary| vocabulary.departments.clone())
            .unwrap_or_default();
        if departments.is_empty() {
            self.status_message = "no department filters available".to_string();
            return;
        }
        let next = next_option(&departments, review.selected_department.clone());
        review.set_department(next);
        self.selected = 0;
        self.dispatch_page_fetch();
    }

    /// Regroups the current page client-side; no fetch needed
    pub(super) fn cycle_group(&mut self) {
        if let Some(review) = self.review.as_mut() {
            review.cycle_group_by();
        }
    }

    pub(super) fn toggle_sort(&mut self) {
        if let Some(review) = self.review.as_mut() {
            review.toggle_sort_order();
        }
    }

    /// The requested limit is advisory; the server-confirmed value from
    /// the next response overwrites it.
    pub(super) fn change_limit(&mut self, delta: i64) {
        if let Some(review) = self.review.as_mut() {
            let limit = (i64::from(review.pager.limit) + delta).clamp(5, 50) as u32;
            if limit != review.pager.limit {
                review.pager.set_limit(limit);
                self.dispatch_page_fetch();
            }
        }
    }

    pub(super) fn page_next(&mut self) {
        if let Some(review) = self.review.as_mut() {
            if review.pager.next() {
                self.selected = 0;
                self.dispatch_page_fetch();
            }
        }
    }

    pub(super) fn page_previous(&mut self) {
        if let Some(review) = self.review.as_mut() {
            if review.pager.previous() {
                self.selected = 0;
                self.dispatch_page_fetch();
            }
        }
    }

    pub(super) fn open_login_modal(&mut self) {
        self.active_modal = Some(ActiveModal::Login(LoginModal::new()));
    }

    /// Register needs the department list first; an empty or failed
    /// lookup keeps the modal closed with a status message.
    pub(super) async fn open_register_modal(&mut self) {
        match self.client.departments().await {
            Ok(departments) if !departments.is_empty() => {
                let options = departments
                    .into_iter()
                    .map(|department| (department.id, department.name))
                    .collect();
                self.active_modal = Some(ActiveModal::Register(RegisterModal::new(options)));
            }
            Ok(_) => {
                self.status_message = "no departments available for registration".to_string();
            }
            Err(err) => {
                self.status_message = format!("failed to load departments: {err}");
            }
        }
    }

    pub(super) fn open_submit_modal(&mut self) {
        if self.role() != Some(Role::Employee) {
            return;
        }
        let Some(user) = self.user.as_ref() else {
            return;
        };
        self.active_modal = Some(ActiveModal::SubmitTask(SubmitTaskModal::new(
            user.department_name.clone(),
        )));
    }

    pub(super) fn open_reject_modal(&mut self) {
        let can_review = self
            .review
            .as_ref()
            .map(ReviewState::can_review)
            .unwrap_or(false);
        if !can_review {
            return;
        }
        let Some(task) = self.selected_task() else {
            self.status_message = "no task selected".to_string();
            return;
        };
        self.active_modal = Some(ActiveModal::Reject(RejectModal::new(task.id, task.title)));
    }

    /// Fix is reachable only for employees and only on rejected tasks
    pub(super) fn open_fix_modal(&mut self) {
        let Some(task) = self.selected_task() else {
            self.status_message = "no task selected".to_string();
            return;
        };
        let can_fix = self
            .review
            .as_ref()
            .map(|review| review.can_fix(&task))
            .unwrap_or(false);
        if !can_fix {
            self.status_message = "only rejected tasks can be fixed".to_string();
            return;
        }
        self.active_modal = Some(ActiveModal::Fix(FixModal::new(task.id, task.link_url)));
    }

    pub(super) fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub(super) fn active_modal_mut(&mut self) -> Option<&mut ActiveModal> {
        self.active_modal.as_mut()
    }

    pub(super) async fn submit_login(
        &mut self,
        email: String,
        password: String,
    ) -> Result<(), PortalError> {
        let token = self.client.login(&LoginRequest { email, password }).await?;
        if let Err(err) = self.session_store.save(&StoredSession::new(
            token.access_token,
            self.config.base_url.clone(),
        )) {
            warn!(error = %err, "failed to persist session");
        }
        let profile = self.client.me().await?;
        self.enter_dashboard(profile);
        Ok(())
    }

    pub(super) async fn submit_register(
        &mut self,
        name: String,
        email: String,
        password: String,
        department_id: String,
    ) -> Result<(), PortalError> {
        self.client
            .register(&RegisterRequest {
                name,
                email,
                password,
                department_id,
            })
            .await?;
        self.status_message =
            "registration successful, sign in with your new account".to_string();
        Ok(())
    }

    pub(super) async fn submit_new_task(
        &mut self,
        title: String,
        link_url: String,
    ) -> Result<(), PortalError> {
        let Some(user) = self.user.as_ref() else {
            return Err(PortalError::Unauthorized);
        };
        let task = NewTask {
            title,
            link_url,
            department_id: user.department_id.clone(),
        };
        self.client.submit_task(&task).await?;
        self.status_message = "task uploaded for review".to_string();
        self.dispatch_page_fetch();
        Ok(())
    }

    pub(super) async fn submit_reject(
        &mut self,
        task_id: String,
        comment: String,
    ) -> Result<(), PortalError> {
        self.client.reject_task(&task_id, &comment).await?;
        self.status_message = "task rejected".to_string();
        self.dispatch_page_fetch();
        Ok(())
    }

    pub(super) async fn submit_fix(
        &mut self,
        task_id: String,
        link_url: String,
    ) -> Result<(), PortalError> {
        self.client.fix_task(&task_id, &link_url).await?;
        self.status_message = "task link updated, waiting for review".to_string();
        self.dispatch_page_fetch();
        Ok(())
    }

    /// Accept has no form; failures surface through the same status path
    /// as every other mutation.
    pub(super) async fn accept_selected(&mut self) {
        let can_review = self
            .review
            .as_ref()
            .map(ReviewState::can_review)
            .unwrap_or(false);
        if !can_review {
            return;
        }
        let Some(task) = self.selected_task() else {
            self.status_message = "no task selected".to_string();
            return;
        };
        match self.client.accept_task(&task.id).await {
            Ok(()) => {
                self.status_message = format!("task accepted: {}", task.title);
                self.dispatch_page_fetch();
            }
            Err(err) => self.report_action_failure("accept task", err),
        }
    }

    pub(super) async fn logout(&mut self) {
        if let Err(err) = self.client.logout().await {
            warn!(error = %err, "backend logout failed");
        }
        self.drop_to_login("signed out");
    }

    pub(super) fn report_action_failure(&mut self, action: &str, err: PortalError) {
        if err.is_auth_error() {
            self.drop_to_login("session expired, please sign in again");
        } else {
            self.status_message = format!("{action} failed: {err}");
        }
    }
}

/// Advance through None -> first option -> ... -> last option -> None
fn next_option<T: Clone + PartialEq>(options: &[T], current: Option<T>) -> Option<T> {
    match current {
        None => options.first().cloned(),
        Some(current) => match options.iter().position(|option| *option == current) {
            Some(index) if index + 1 < options.len() => Some(options[index + 1].clone()),
            _ => None,
        },
    }
}
