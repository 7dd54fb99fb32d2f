//! Error taxonomy for the task core.
//!
//! Two layers:
//!
//! - [`StoreError`] comes from the persistence adapter and keeps "file is absent"
//!   apart from genuine I/O and parse failures.
//! - [`TaskError`] is what the service returns. A missing task id and an
//!   exhausted id space are their own variants; everything else is a storage
//!   failure. Each carries the operation that hit it.

use super::task::TaskId;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("task file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to access task file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed task file {}", .path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Operation being performed when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Update(TaskId),
    Delete(TaskId),
    Mark(TaskId),
    List,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add task"),
            Operation::Update(id) => write!(f, "update task {}", id),
            Operation::Delete(id) => write!(f, "delete task {}", id),
            Operation::Mark(id) => write!(f, "mark task {}", id),
            Operation::List => write!(f, "list tasks"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("failed to {op}: task not found: with id {id}")]
    NotFound { op: Operation, id: TaskId },

    #[error("failed to add task: no ids left after {0}")]
    IdsExhausted(TaskId),

    #[error("failed to {op}")]
    Storage {
        op: Operation,
        #[source]
        source: StoreError,
    },
}

impl TaskError {
    pub fn storage(op: Operation) -> impl FnOnce(StoreError) -> TaskError {
        move |source| TaskError::Storage { op, source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskError::NotFound { .. })
    }
}
