//! Task list/detail state and its operations.

use crate::error::StoreError;
use parking_lot::RwLock;
use std::sync::Arc;
use taskdeck_client::TaskGateway;
use taskdeck_core::{NewTask, OperationOutcome, QueryFilter, SortOrder, Task, TaskPage, TaskState, TaskUpdate};

/// Active filters for the task list.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFilters {
    pub search: String,
    pub state_id: Option<i64>,
    pub order_by: SortOrder,
}

/// Server-driven pagination cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based.
    pub page_number: u32,
    pub page_size: u32,
    pub total_count: u64,
}

/// The task resource as last confirmed by the backend, plus view state.
#[derive(Debug, Clone, PartialEq)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub selected: Option<Task>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: TaskFilters,
    pub pagination: Pagination,
    /// States offered on the task form.
    pub available_states: Vec<TaskState>,
    pub loading_states: bool,
}

impl Default for TasksState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            loading: false,
            error: None,
            filters: TaskFilters {
                search: String::new(),
                state_id: None,
                order_by: SortOrder::DueDateAsc,
            },
            pagination: Pagination {
                page_number: 1,
                page_size: 10,
                total_count: 0,
            },
            available_states: Vec::new(),
            loading_states: false,
        }
    }
}

impl TasksState {
    pub fn begin_list_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the visible page with a confirmed server result.
    pub fn apply_page(&mut self, page: TaskPage) {
        self.loading = false;
        self.items = page.items;
        self.pagination.total_count = page.total_count;
        self.pagination.page_number = page.page_number;
        self.pagination.page_size = page.page_size;
    }

    pub fn fail_list(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn begin_detail_load(&mut self) {
        self.loading = true;
        self.error = None;
        self.selected = None;
    }

    pub fn apply_selected(&mut self, task: Task) {
        self.loading = false;
        self.selected = Some(task);
    }

    pub fn fail_detail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn begin_states_load(&mut self) {
        self.loading_states = true;
    }

    pub fn apply_states(&mut self, states: Vec<TaskState>) {
        self.loading_states = false;
        self.available_states = states;
    }

    /// Form states failing to load is not worth an alert; the form shows its
    /// own placeholder.
    pub fn fail_states(&mut self) {
        self.loading_states = false;
    }

    /// Changing the search text starts over from the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filters.search = search.into();
        self.pagination.page_number = 1;
    }

    /// Changing the state filter starts over from the first page.
    pub fn set_state_filter(&mut self, state_id: Option<i64>) {
        self.filters.state_id = state_id;
        self.pagination.page_number = 1;
    }

    /// Sort order keeps the current page.
    pub fn set_order_by(&mut self, order_by: SortOrder) {
        self.filters.order_by = order_by;
    }

    pub fn set_page_number(&mut self, page_number: u32) {
        self.pagination.page_number = page_number;
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.pagination.page_size = page_size;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// The query the active filters and cursor translate to. Empty search
    /// text is not sent.
    pub fn query(&self) -> QueryFilter {
        QueryFilter {
            search: if self.filters.search.is_empty() {
                None
            } else {
                Some(self.filters.search.clone())
            },
            state_id: self.filters.state_id,
            order_by: Some(self.filters.order_by),
            page_number: Some(self.pagination.page_number),
            page_size: Some(self.pagination.page_size),
        }
    }
}

/// Store for the task resource: owns a [`TasksState`] and the operations
/// that synchronize it with the backend.
pub struct TaskStore {
    api: Arc<dyn TaskGateway>,
    state: RwLock<TasksState>,
}

impl TaskStore {
    pub fn new(api: Arc<dyn TaskGateway>) -> Self {
        Self {
            api,
            state: RwLock::new(TasksState::default()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> TasksState {
        self.state.read().clone()
    }

    /// Fetch the task page described by the active filters.
    pub async fn fetch_tasks(&self) -> Result<(), StoreError> {
        let filter = {
            let mut state = self.state.write();
            state.begin_list_load();
            state.query()
        };

        tracing::debug!(?filter, "fetching tasks");
        match self.api.list(&filter).await {
            Ok(page) => {
                self.state.write().apply_page(page);
                Ok(())
            }
            Err(err) => {
                self.state.write().fail_list(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Fetch a single task into `selected`.
    pub async fn fetch_task(&self, id: i64) -> Result<(), StoreError> {
        self.state.write().begin_detail_load();

        match self.api.get(id).await {
            Ok(task) => {
                self.state.write().apply_selected(task);
                Ok(())
            }
            Err(err) => {
                self.state.write().fail_detail(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Fetch the states offered on the task form.
    pub async fn fetch_task_states(&self) -> Result<(), StoreError> {
        self.state.write().begin_states_load();

        match self.api.states().await {
            Ok(states) => {
                self.state.write().apply_states(states);
                Ok(())
            }
            Err(err) => {
                self.state.write().fail_states();
                Err(err.into())
            }
        }
    }

    pub async fn create_task(&self, draft: &NewTask) -> Result<(), StoreError> {
        self.state.write().clear_error();
        let outcome = self.api.create(draft).await;
        self.apply_write(outcome).await
    }

    pub async fn update_task(&self, update: &TaskUpdate) -> Result<(), StoreError> {
        self.state.write().clear_error();
        let outcome = self.api.update(update).await;
        self.apply_write(outcome).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), StoreError> {
        self.state.write().clear_error();
        let outcome = self.api.delete(id).await;
        self.apply_write(outcome).await
    }

    /// A confirmed write invalidates the whole page and refetches it; a
    /// rejected one surfaces the outcome's message and leaves items alone.
    async fn apply_write(&self, outcome: OperationOutcome) -> Result<(), StoreError> {
        if !outcome.is_success() {
            self.state.write().error = Some(outcome.message.clone());
            return Err(StoreError::Rejected(outcome.message));
        }
        self.fetch_tasks().await
    }

    pub fn set_search(&self, search: impl Into<String>) {
        self.state.write().set_search(search);
    }

    pub fn set_state_filter(&self, state_id: Option<i64>) {
        self.state.write().set_state_filter(state_id);
    }

    pub fn set_order_by(&self, order_by: SortOrder) {
        self.state.write().set_order_by(order_by);
    }

    pub fn set_page_number(&self, page_number: u32) {
        self.state.write().set_page_number(page_number);
    }

    pub fn set_page_size(&self, page_size: u32) {
        self.state.write().set_page_size(page_size);
    }

    pub fn clear_error(&self) {
        self.state.write().clear_error();
    }
}
