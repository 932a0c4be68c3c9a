use tracing::debug;

use super::{Task, TaskId};

/// Outcome of [`TaskLedger::remove_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub task: Task,
    pub selection_cleared: bool,
}

/// Ordered in-memory task list with an optional current selection.
///
/// The selection is an id, not a name, so duplicate names never confuse
/// which task is selected or whether removing one clears it.
#[derive(Debug, Clone, Default)]
pub struct TaskLedger {
    tasks: Vec<Task>,
    selected: Option<TaskId>,
    next_id: u64,
}

impl TaskLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn selected(&self) -> Option<&Task> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected().map(|t| t.name.as_str())
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Append a task. Blank names are rejected and leave the list untouched.
    pub fn add_task(&mut self, name: &str) -> Option<&Task> {
        if name.trim().is_empty() {
            return None;
        }
        self.next_id += 1;
        let task = Task::new(TaskId(self.next_id), name.to_string());
        debug!(id = %task.id, name = %task.name, "task added");
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Flip the completed flag. Returns the new value, or `None` for an unknown id.
    pub fn toggle_completed(&mut self, id: TaskId) -> Option<bool> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Returns the new pomodoro count, or `None` for an unknown id.
    pub fn increment_pomodoro(&mut self, id: TaskId) -> Option<u32> {
        let task = self.get_mut(id)?;
        task.pomodoro_count = task.pomodoro_count.saturating_add(1);
        Some(task.pomodoro_count)
    }

    pub fn remove_task(&mut self, id: TaskId) -> Option<Removal> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(index);
        let selection_cleared = self.selected == Some(id);
        if selection_cleared {
            self.selected = None;
        }
        debug!(%id, selection_cleared, "task removed");
        Some(Removal {
            task,
            selection_cleared,
        })
    }

    /// Select `id`, or clear the selection if no such task exists.
    pub fn select_task(&mut self, id: TaskId) -> Option<&Task> {
        self.selected = self.get(id).map(|t| t.id);
        self.selected()
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }
}
