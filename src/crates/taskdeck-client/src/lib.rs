//! HTTP API client for the taskdeck backend.
//!
//! This crate wraps the backend's task and state resources behind typed,
//! async clients:
//!
//! - **[`TaskApi`] / [`StateApi`]** - resource clients implementing the
//!   [`TaskGateway`] / [`StateGateway`] traits the store consumes
//! - **[`TokenProvider`]** - bearer-credential cache with an injectable
//!   [`Clock`] and [`Authenticator`] seam
//! - **[`ApiConfig`]** - base URL and credentials, read from the environment
//!
//! Reads return `Result<_, ApiError>`. Writes never fail at the type level:
//! transport errors and backend rejections are folded into an
//! [`OperationOutcome`](taskdeck_core::OperationOutcome) whose flags the
//! caller must check.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use taskdeck_client::{ApiConfig, HttpAuthenticator, TaskApi, TokenProvider};
//! use taskdeck_core::QueryFilter;
//!
//! let config = ApiConfig::from_env()?;
//! let tokens = Arc::new(TokenProvider::new(
//!     Arc::new(HttpAuthenticator::new(config.clone())),
//!     config.token_ttl,
//! ));
//! let tasks = TaskApi::new(config, tokens);
//!
//! let page = tasks.list(&QueryFilter::default()).await?;
//! println!("{} tareas", page.total_count);
//! ```

pub mod config;
pub mod error;
mod outcome;
pub mod states;
pub mod tasks;
pub mod token;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use states::{StateApi, StateGateway};
pub use tasks::{TaskApi, TaskGateway};
pub use token::{Authenticator, Clock, HttpAuthenticator, SystemClock, TokenProvider};
