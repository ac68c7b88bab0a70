//! Domain types for the taskdeck client stack.
//!
//! This crate defines the canonical shapes shared by the API client, the
//! application state store, and the CLI:
//!
//! - **[`Task`] / [`TaskState`]** - the two backend resources
//! - **[`QueryFilter`] / [`SortOrder`] / [`TaskPage`]** - server-side
//!   pagination and filtering
//! - **[`OperationOutcome`]** - the canonical result of every write operation
//! - **[`NewTask`] / [`TaskUpdate`] / [`NewState`]** - write drafts with
//!   client-side validation
//!
//! The backend emits the same payloads under two casing conventions
//! (`dueDate` vs `DueDate`). The canonical types absorb both through serde
//! `alias` attributes, and keep any fields the client does not model in a
//! flattened passthrough map, so normalization happens in exactly one place:
//! deserialization into these types.
//!
//! # Example
//!
//! ```rust
//! use taskdeck_core::OperationOutcome;
//!
//! let outcome: OperationOutcome =
//!     serde_json::from_str(r#"{"StateOperation": true, "Result": true}"#).unwrap();
//! assert!(outcome.is_success());
//! assert_eq!(outcome.message, "Operación exitosa");
//! ```

pub mod filter;
pub mod outcome;
pub mod state;
pub mod task;
pub mod validate;

pub use filter::{QueryFilter, SortOrder};
pub use outcome::OperationOutcome;
pub use state::{NewState, TaskState};
pub use task::{NewTask, Task, TaskPage, TaskUpdate};
pub use validate::ValidationError;
