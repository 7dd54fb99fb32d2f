//! Task data model.
//!
//! A [`Task`] is the only persisted entity. Its JSON shape is fixed:
//!
//! ```json
//! {"id": 1, "description": "buy milk", "status": 0, "createdAt": "2025-12-12T13:13:59Z"}
//! ```
//!
//! `status` is stored as an integer (`0 = todo`, `1 = in-progress`, `2 = done`)
//! and `updatedAt` is omitted until the task is edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned by the service, unique within a collection.
pub type TaskId = u64;

/// Point in time used for `createdAt` / `updatedAt`.
pub type Timestamp = DateTime<Utc>;

/// Task state. Any status may be set from any other; there is no terminal state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Status {
    #[default]
    Todo = 0,
    InProgress = 1,
    Done = 2,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| format!("unknown status '{}', expected one of: todo, in-progress, done", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub status: Status,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Caller input for creating a task. The id and timestamps are filled in by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub description: String,
    pub status: Status,
}

impl NewTask {
    pub fn new(description: &str) -> Self {
        NewTask {
            description: description.to_string(),
            status: Status::default(),
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// Caller input for editing a task. `status` is only applied when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub description: String,
    pub status: Option<Status>,
}

impl TaskPatch {
    pub fn description(description: &str) -> Self {
        TaskPatch {
            description: description.to_string(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }
}
