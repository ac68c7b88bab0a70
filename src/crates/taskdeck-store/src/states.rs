//! State list/detail state and its operations.

use crate::error::StoreError;
use parking_lot::RwLock;
use std::sync::Arc;
use taskdeck_client::StateGateway;
use taskdeck_core::{NewState, OperationOutcome, TaskState};

/// The state resource as last confirmed by the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatesState {
    pub items: Vec<TaskState>,
    pub selected: Option<TaskState>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StatesState {
    pub fn begin_list_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_items(&mut self, items: Vec<TaskState>) {
        self.loading = false;
        self.items = items;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn begin_detail_load(&mut self) {
        self.loading = true;
        self.error = None;
        self.selected = None;
    }

    pub fn apply_selected(&mut self, state: TaskState) {
        self.loading = false;
        self.selected = Some(state);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Store for the state resource.
pub struct StateStore {
    api: Arc<dyn StateGateway>,
    state: RwLock<StatesState>,
}

impl StateStore {
    pub fn new(api: Arc<dyn StateGateway>) -> Self {
        Self {
            api,
            state: RwLock::new(StatesState::default()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> StatesState {
        self.state.read().clone()
    }

    pub async fn fetch_states(&self) -> Result<(), StoreError> {
        self.state.write().begin_list_load();

        match self.api.list().await {
            Ok(items) => {
                self.state.write().apply_items(items);
                Ok(())
            }
            Err(err) => {
                self.state.write().fail(err.to_string());
                Err(err.into())
            }
        }
    }

    pub async fn fetch_state(&self, id: i64) -> Result<(), StoreError> {
        self.state.write().begin_detail_load();

        match self.api.get(id).await {
            Ok(state) => {
                self.state.write().apply_selected(state);
                Ok(())
            }
            Err(err) => {
                self.state.write().fail(err.to_string());
                Err(err.into())
            }
        }
    }

    pub async fn create_state(&self, draft: &NewState) -> Result<(), StoreError> {
        self.state.write().clear_error();
        let outcome = self.api.create(draft).await;
        self.apply_write(outcome).await
    }

    pub async fn update_state(&self, id: i64, draft: &NewState) -> Result<(), StoreError> {
        self.state.write().clear_error();
        let outcome = self.api.update(id, draft).await;
        self.apply_write(outcome).await
    }

    pub async fn delete_state(&self, id: i64) -> Result<(), StoreError> {
        self.state.write().clear_error();
        let outcome = self.api.delete(id).await;
        self.apply_write(outcome).await
    }

    async fn apply_write(&self, outcome: OperationOutcome) -> Result<(), StoreError> {
        if !outcome.is_success() {
            self.state.write().error = Some(outcome.message.clone());
            return Err(StoreError::Rejected(outcome.message));
        }
        self.fetch_states().await
    }

    pub fn clear_error(&self) {
        self.state.write().clear_error();
    }
}
