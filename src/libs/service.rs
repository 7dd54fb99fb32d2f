//! Task lifecycle operations.
//!
//! Every operation is one full cycle: load the collection, change it in
//! memory, save it back. Nothing is kept between calls. When an operation
//! fails no save happens, so the file on disk is left as it was.

use super::config::{Clock, Config};
use super::error::{Operation, StoreError, TaskError};
use super::storage::{JsonFileStore, TaskStore};
use super::task::{NewTask, Status, Task, TaskId, TaskPatch};
use tracing::debug;

/// Capability set of the task core.
pub trait Tasker {
    /// Stores a new task and returns the id assigned to it.
    fn add(&self, task: NewTask) -> Result<TaskId, TaskError>;

    /// Replaces the description (and the status, when the patch has one) and
    /// stamps `updated_at`.
    fn update(&self, id: TaskId, patch: TaskPatch) -> Result<(), TaskError>;

    fn delete(&self, id: TaskId) -> Result<(), TaskError>;

    /// Sets the status. `updated_at` is left alone.
    fn mark(&self, id: TaskId, status: Status) -> Result<(), TaskError>;

    /// Returns the collection in insertion order, optionally only the tasks
    /// with the given status.
    fn list(&self, status: Option<Status>) -> Result<Vec<Task>, TaskError>;
}

pub struct TaskService<S: TaskStore = JsonFileStore> {
    store: S,
    now: Clock,
}

impl TaskService<JsonFileStore> {
    pub fn new(config: Config) -> Self {
        Self {
            store: JsonFileStore::new(config.save_path),
            now: config.now,
        }
    }
}

impl<S: TaskStore> TaskService<S> {
    pub fn with_store(store: S, now: Clock) -> Self {
        Self { store, now }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the collection, treating a missing file as empty.
    fn load_or_empty(&self, op: Operation) -> Result<Vec<Task>, TaskError> {
        match self.store.load() {
            Ok(tasks) => Ok(tasks),
            Err(StoreError::NotFound(_)) => Ok(Vec::new()),
            Err(source) => Err(TaskError::Storage { op, source }),
        }
    }

    fn save(&self, op: Operation, tasks: &[Task]) -> Result<(), TaskError> {
        self.store.save(tasks).map_err(TaskError::storage(op))
    }

    /// Applies `change` to the task with `id` and saves, or reports it missing.
    fn modify(&self, op: Operation, id: TaskId, change: impl FnOnce(&mut Task)) -> Result<(), TaskError> {
        let mut tasks = self.load_or_empty(op)?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskError::NotFound { op, id })?;
        change(task);
        self.save(op, &tasks)
    }
}

/// Next free id: one past the largest id in use, or 1 for an empty collection.
/// `None` once the largest id is `TaskId::MAX`.
pub fn next_id(tasks: &[Task]) -> Option<TaskId> {
    tasks.iter().map(|task| task.id).max().unwrap_or(0).checked_add(1)
}

impl<S: TaskStore> Tasker for TaskService<S> {
    fn add(&self, new_task: NewTask) -> Result<TaskId, TaskError> {
        let mut tasks = self.load_or_empty(Operation::Add)?;

        let id = next_id(&tasks).ok_or(TaskError::IdsExhausted(TaskId::MAX))?;
        tasks.push(Task {
            id,
            description: new_task.description,
            status: new_task.status,
            created_at: (self.now)(),
            updated_at: None,
        });
        self.save(Operation::Add, &tasks)?;

        debug!(id, "task added");
        Ok(id)
    }

    fn update(&self, id: TaskId, patch: TaskPatch) -> Result<(), TaskError> {
        let now = (self.now)();
        self.modify(Operation::Update(id), id, |task| {
            task.description = patch.description;
            if let Some(status) = patch.status {
                task.status = status;
            }
            task.updated_at = Some(now);
        })?;

        debug!(id, "task updated");
        Ok(())
    }

    fn delete(&self, id: TaskId) -> Result<(), TaskError> {
        let op = Operation::Delete(id);
        let mut tasks = self.load_or_empty(op)?;

        let position = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskError::NotFound { op, id })?;
        tasks.remove(position);
        self.save(op, &tasks)?;

        debug!(id, "task deleted");
        Ok(())
    }

    fn mark(&self, id: TaskId, status: Status) -> Result<(), TaskError> {
        self.modify(Operation::Mark(id), id, |task| task.status = status)?;

        debug!(id, %status, "task marked");
        Ok(())
    }

    fn list(&self, status: Option<Status>) -> Result<Vec<Task>, TaskError> {
        let tasks = self.load_or_empty(Operation::List)?;

        let tasks: Vec<Task> = match status {
            Some(status) => tasks.into_iter().filter(|task| task.status == status).collect(),
            None => tasks,
        };

        debug!(count = tasks.len(), filter = ?status, "tasks listed");
        Ok(tasks)
    }
}
