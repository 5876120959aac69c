//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide the ordered task collection with insert/update/remove by id.
//! - Keep collection-order rules inside the store boundary.
//!
//! # Invariants
//! - Write paths call `Task::validate()` before mutating the collection.
//! - Ids are unique across the collection.
//! - New tasks are prepended; untouched entries keep their relative order.
//! - A failed write leaves the collection exactly as it was.

use crate::model::task::{Task, TaskId, TaskPatch, TaskValidationError};
use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error(transparent)]
    Validation(#[from] TaskValidationError),
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("task id already exists: {0}")]
    DuplicateId(TaskId),
}

/// Repository interface for task store operations.
pub trait TaskRepository {
    /// Inserts at the front of the collection and returns the stored id.
    fn insert_front(&mut self, task: Task) -> RepoResult<TaskId>;
    /// Merges `patch` into the task and returns the updated record.
    fn update_task(&mut self, id: TaskId, patch: &TaskPatch) -> RepoResult<Task>;
    /// Removes the task and returns the deleted record.
    fn remove_task(&mut self, id: TaskId) -> RepoResult<Task>;
    fn get_task(&self, id: TaskId) -> Option<&Task>;
    /// All tasks in collection order.
    fn list_tasks(&self) -> &[Task];
    /// Removes every task and returns how many were dropped.
    fn clear(&mut self) -> usize;
}

/// Vec-backed task store living for the lifetime of one view.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from tasks already in display order.
    ///
    /// # Errors
    /// - `Validation` when any task breaks record invariants.
    /// - `DuplicateId` when two tasks share an id.
    pub fn with_tasks(tasks: Vec<Task>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for task in tasks {
            task.validate()?;
            if repo.position(task.id).is_some() {
                return Err(RepoError::DuplicateId(task.id));
            }
            repo.tasks.push(task);
        }
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn insert_front(&mut self, task: Task) -> RepoResult<TaskId> {
        task.validate()?;
        if self.position(task.id).is_some() {
            return Err(RepoError::DuplicateId(task.id));
        }

        let id = task.id;
        self.tasks.insert(0, task);
        Ok(id)
    }

    fn update_task(&mut self, id: TaskId, patch: &TaskPatch) -> RepoResult<Task> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        let task = &mut self.tasks[index];
        patch.apply_to(task)?;
        Ok(task.clone())
    }

    fn remove_task(&mut self, id: TaskId) -> RepoResult<Task> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn list_tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn clear(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        removed
    }
}
