//! Task service configuration.
//!
//! [`Config`] bundles the two things a [`TaskService`](super::service::TaskService)
//! needs from the outside world: where the collection lives and how to read
//! the current time.
//!
//! ```rust,no_run
//! use task_cli::libs::config::Config;
//! use task_cli::libs::service::TaskService;
//!
//! let config = Config::default().with_save_path("work-tasks.json");
//! let service = TaskService::new(config);
//! ```

use super::task::Timestamp;
use chrono::Utc;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Default location of the task file, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "tasks.json";

/// Environment variable that overrides the task file location.
pub const SAVE_PATH_ENV: &str = "TASK_CLI_FILE";

/// Source of the current time.
pub type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

/// Clock backed by the system time.
pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// Clock that always returns `at`.
pub fn fixed_clock(at: Timestamp) -> Clock {
    Arc::new(move || at)
}

#[derive(Clone)]
pub struct Config {
    /// Path of the JSON document holding the collection.
    pub save_path: PathBuf,
    /// Clock used for `createdAt` / `updatedAt`.
    pub now: Clock,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            now: system_clock(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config").field("save_path", &self.save_path).finish_non_exhaustive()
    }
}

impl Config {
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    pub fn with_clock(mut self, now: Clock) -> Self {
        self.now = now;
        self
    }
}
