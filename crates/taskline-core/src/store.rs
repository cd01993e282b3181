use thiserror::Error;
use tracing::debug;

use crate::task::{Task, TaskPatch};

pub const FIRST_ID: u64 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("task with ID {0} not found")]
    NotFound(u64),
    #[error("invalid task: {0}")]
    InvalidTask(String),
}

/// In-memory, insertion-ordered task list.
///
/// Ids start at [`FIRST_ID`] and are never handed out twice, even when the
/// tail of the list is deleted.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    high_water: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        let after_last = self
            .tasks
            .last()
            .map(|task| task.id + 1)
            .unwrap_or(FIRST_ID);
        after_last.max(self.high_water + 1)
    }

    pub fn add(&mut self, title: impl Into<String>) -> Result<Task, StoreError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(StoreError::InvalidTask("title must not be empty".to_string()));
        }
        let task = Task::new(self.next_id(), title);
        self.high_water = task.id;
        debug!(id = task.id, title = %task.title, "task added");
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub fn find(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn edit(&mut self, id: u64, patch: TaskPatch) -> Result<&Task, StoreError> {
        let idx = self.position(id)?;
        if matches!(&patch.title, Some(title) if title.trim().is_empty()) {
            return Err(StoreError::InvalidTask("title must not be empty".to_string()));
        }
        let task = &mut self.tasks[idx];
        patch.apply(task);
        debug!(id, title = %task.title, completed = task.completed, "task updated");
        Ok(&self.tasks[idx])
    }

    pub fn delete(&mut self, id: u64) -> Result<Task, StoreError> {
        let idx = self.position(id)?;
        let removed = self.tasks.remove(idx);
        debug!(id, remaining = self.tasks.len(), "task deleted");
        Ok(removed)
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    fn position(&self, id: u64) -> Result<usize, StoreError> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}
