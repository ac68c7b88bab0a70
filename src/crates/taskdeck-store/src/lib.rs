//! Application state store for the taskdeck client stack.
//!
//! Holds the last-fetched view of each resource and the transitions that
//! keep it in sync with the backend:
//!
//! - **[`TasksState`] / [`StatesState`]** - items, selection, loading/error
//!   flags, plus filter and pagination sub-state for tasks
//! - **[`TaskStore`] / [`StateStore`]** - async operations that call the
//!   gateway and fold the result back into state
//!
//! Every mutation that the backend accepts triggers a full list refetch, so
//! the state always reflects confirmed server data; there are no optimistic
//! updates. Each transition is one atomic update under the lock, which is
//! never held across an await. In-flight requests are not cancelled: when
//! responses land out of order, the last one to resolve wins.

pub mod error;
pub mod states;
pub mod tasks;

pub use error::StoreError;
pub use states::{StateStore, StatesState};
pub use tasks::{Pagination, TaskFilters, TaskStore, TasksState};
