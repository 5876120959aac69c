//! Task use-case service.
//!
//! # Responsibility
//! - Provide the create/update/remove/toggle entry points for view callers.
//! - Derive filtered, sorted and aggregated views of the collection.
//!
//! # Invariants
//! - Every mutation is all-or-nothing; a rejected call changes nothing.
//! - `id` and `created_at` are assigned here and never rewritten.
//! - Logging carries ids and counts only, never task text.

use crate::model::settings::AppPreferences;
use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch};
use crate::repo::task_repo::{InMemoryTaskRepository, RepoError, RepoResult, TaskRepository};
use crate::search::filter::TaskFilter;
use crate::search::order::sort_tasks;
use crate::seed::sample_tasks;
use crate::stats::summary::{self, DashboardSummary, TaskStats, RECENT_TASKS_LIMIT};
use chrono::{Local, NaiveDate};
use log::{info, warn};

/// Use-case facade over a task repository.
pub struct TaskService<R: TaskRepository = InMemoryTaskRepository> {
    repo: R,
}

impl TaskService<InMemoryTaskRepository> {
    /// Service over an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryTaskRepository::new())
    }

    /// Service over an in-memory store seeded with the sample tasks.
    pub fn with_sample_data() -> RepoResult<Self> {
        let repo = InMemoryTaskRepository::with_tasks(sample_tasks()?)?;
        info!(
            "event=task_seed module=service status=ok count={}",
            repo.len()
        );
        Ok(Self::new(repo))
    }
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a task dated today (local calendar) and prepends it.
    pub fn create_task(&mut self, draft: TaskDraft) -> RepoResult<Task> {
        self.create_task_on(draft, Local::now().date_naive())
    }

    /// Creates a task with an explicit creation date and prepends it.
    ///
    /// # Contract
    /// - Blank titles fail with `RepoError::Validation`.
    /// - The new task starts with `completed = false`.
    pub fn create_task_on(&mut self, draft: TaskDraft, today: NaiveDate) -> RepoResult<Task> {
        let task = Task::new(draft, today).inspect_err(|err| {
            warn!("event=task_create module=service status=error error={err}");
        })?;
        self.repo.insert_front(task.clone())?;
        info!(
            "event=task_create module=service status=ok id={} count={}",
            task.id,
            self.repo.list_tasks().len()
        );
        Ok(task)
    }

    /// Merges provided fields into an existing task.
    pub fn update_task(&mut self, id: TaskId, patch: &TaskPatch) -> RepoResult<Task> {
        let result = self.repo.update_task(id, patch);
        log_mutation("task_update", id, &result);
        result
    }

    /// Deletes a task unconditionally and returns it.
    pub fn remove_task(&mut self, id: TaskId) -> RepoResult<Task> {
        let result = self.repo.remove_task(id);
        log_mutation("task_remove", id, &result);
        result
    }

    /// Flips the completion flag.
    pub fn toggle_completed(&mut self, id: TaskId) -> RepoResult<Task> {
        let completed = self
            .repo
            .get_task(id)
            .map(|task| task.completed)
            .ok_or(RepoError::NotFound(id));
        let result = completed.and_then(|completed| {
            let patch = TaskPatch {
                completed: Some(!completed),
                ..TaskPatch::default()
            };
            self.repo.update_task(id, &patch)
        });
        log_mutation("task_toggle", id, &result);
        result
    }

    /// Deletes every task; returns how many were removed.
    pub fn clear_tasks(&mut self) -> usize {
        let removed = self.repo.clear();
        info!("event=task_clear module=service status=ok removed={removed}");
        removed
    }

    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.repo.get_task(id)
    }

    /// All tasks in collection order (newest first for created tasks).
    pub fn list_tasks(&self) -> &[Task] {
        self.repo.list_tasks()
    }

    /// Tasks passing `filter`, in collection order.
    pub fn filtered_tasks(&self, filter: &TaskFilter) -> Vec<&Task> {
        filter.apply(self.repo.list_tasks())
    }

    /// Tasks passing `filter`, honouring the completed-task visibility and
    /// sort order preferences.
    pub fn visible_tasks(&self, filter: &TaskFilter, prefs: &AppPreferences) -> Vec<&Task> {
        let mut view = self.filtered_tasks(filter);
        if !prefs.show_completed_tasks {
            view.retain(|task| !task.completed);
        }
        sort_tasks(&mut view, prefs.task_sort_order);
        view
    }

    /// Statistics page aggregate as of `today`.
    pub fn stats(&self, today: NaiveDate) -> TaskStats {
        summary::compute(self.repo.list_tasks(), today)
    }

    /// Home page aggregate.
    pub fn dashboard(&self) -> DashboardSummary {
        summary::dashboard(self.repo.list_tasks(), RECENT_TASKS_LIMIT)
    }
}

fn log_mutation(event: &str, id: TaskId, result: &RepoResult<Task>) {
    match result {
        Ok(_) => info!("event={event} module=service status=ok id={id}"),
        Err(err) => warn!("event={event} module=service status=error id={id} error={err}"),
    }
}
