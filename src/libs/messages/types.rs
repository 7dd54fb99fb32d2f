use crate::libs::task::{Status, TaskId};
use std::path::PathBuf;

/// Every line of user-facing text the command layer prints.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(TaskId),
    TaskUpdated(TaskId),
    TaskDeleted(TaskId),
    TaskMarked(Status, TaskId),

    // === TASK FILE MESSAGES ===
    TaskFileRemoved(PathBuf),
    UsingTaskFile(PathBuf),

    // === ERROR MESSAGES ===
    CommandFailed(String),
}
