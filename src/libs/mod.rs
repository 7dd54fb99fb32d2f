//! Core library modules for task-cli.
//!
//! ## Layout
//!
//! - **task**: the `Task` record and its status
//! - **storage**: whole-file JSON persistence
//! - **service**: add / update / delete / mark / list
//! - **config**: save path and clock for the service
//! - **error**: storage and service error types
//! - **view**: table rendering for `list`
//! - **messages**: user-facing text and output macros
//! - **logging**: tracing subscriber for debug mode
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_cli::libs::config::Config;
//! use task_cli::libs::service::{TaskService, Tasker};
//! use task_cli::libs::task::NewTask;
//!
//! let service = TaskService::new(Config::default());
//! let id = service.add(NewTask::new("buy milk"))?;
//! # Ok::<(), task_cli::libs::error::TaskError>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod messages;
pub mod service;
pub mod storage;
pub mod task;
pub mod view;
