use super::task::Task;

/// Number of spaces between the description column and the status column.
const COLUMN_GAP: usize = 2;

pub struct View {}

impl View {
    /// Renders tasks as a two-column table: the description padded to the
    /// widest description plus a gap, then the status name.
    pub fn tasks(tasks: &[Task]) -> String {
        let width = tasks.iter().map(|task| task.description.chars().count()).max().unwrap_or(0);

        tasks
            .iter()
            .map(|task| format!("{:<width$}{:gap$}{}\n", task.description, "", task.status, width = width, gap = COLUMN_GAP))
            .collect()
    }
}
