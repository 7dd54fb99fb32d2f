//! Display implementation for task-cli messages.
//!
//! All message text lives here so the command handlers only pick a
//! [`Message`] variant and never format strings themselves.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task added successfully (ID: {})", id),
            Message::TaskUpdated(id) => format!("Task updated successfully (ID: {})", id),
            Message::TaskDeleted(id) => format!("Task deleted successfully (ID: {})", id),
            Message::TaskMarked(status, id) => format!("Task marked as {} successfully (ID: {})", status, id),

            // === TASK FILE MESSAGES ===
            Message::TaskFileRemoved(path) => format!("Task file removed: {}", path.display()),
            Message::UsingTaskFile(path) => format!("Using task file {}", path.display()),

            // === ERROR MESSAGES ===
            Message::CommandFailed(reason) => reason.clone(),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::Status;

    #[test]
    fn confirmation_lines() {
        assert_eq!(Message::TaskAdded(1).to_string(), "Task added successfully (ID: 1)");
        assert_eq!(Message::TaskDeleted(7).to_string(), "Task deleted successfully (ID: 7)");
        assert_eq!(
            Message::TaskMarked(Status::InProgress, 3).to_string(),
            "Task marked as in-progress successfully (ID: 3)"
        );
    }
}
