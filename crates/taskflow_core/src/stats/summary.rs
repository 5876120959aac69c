//! Task statistics and dashboard summaries.
//!
//! # Responsibility
//! - Reduce a task list into counts, rates and per-priority breakdowns.
//! - Classify tasks as overdue or due this week against a reference date.
//!
//! # Invariants
//! - Every function is pure: same tasks + same date give the same result.
//! - The reference date is always an explicit argument, never a clock read.
//! - Rates are whole percentages and are `0` for an empty input.
//! - Id lists keep collection order.

use crate::model::task::{Priority, Task, TaskId};
use chrono::NaiveDate;
use serde::Serialize;

/// Number of tasks shown on the dashboard.
pub const RECENT_TASKS_LIMIT: usize = 4;

/// Task count and completed count for one priority bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityBreakdown {
    pub priority: Priority,
    pub total: usize,
    pub completed: usize,
}

impl PriorityBreakdown {
    pub fn completion_rate(&self) -> u32 {
        completion_rate(self.completed, self.total)
    }
}

/// Statistics page aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub completion_rate: u32,
    /// Buckets in `Priority::ALL` order.
    pub by_priority: [PriorityBreakdown; 3],
    /// Incomplete tasks due strictly before the reference date.
    pub overdue: Vec<TaskId>,
    /// Tasks due in `[date, date + 7 days]`, completed ones included.
    pub due_this_week: Vec<TaskId>,
}

impl TaskStats {
    pub fn priority(&self, priority: Priority) -> PriorityBreakdown {
        self.by_priority[bucket_index(priority)]
    }

    pub fn overdue_count(&self) -> usize {
        self.overdue.len()
    }

    pub fn due_this_week_count(&self) -> usize {
        self.due_this_week.len()
    }
}

/// Home page aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// High priority and not yet completed.
    pub high_priority_pending: usize,
    pub completion_rate: u32,
    /// Leading tasks in collection order.
    pub recent: Vec<Task>,
}

/// Computes every statistic for `tasks` as of `today`.
pub fn compute(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let total = tasks.len();
    let completed = completed_count(tasks);

    TaskStats {
        total,
        completed,
        pending: total - completed,
        completion_rate: completion_rate(completed, total),
        by_priority: priority_breakdown(tasks),
        overdue: overdue_tasks(tasks, today).iter().map(|task| task.id).collect(),
        due_this_week: due_this_week(tasks, today)
            .iter()
            .map(|task| task.id)
            .collect(),
    }
}

/// Computes the home page summary.
pub fn dashboard(tasks: &[Task], recent_limit: usize) -> DashboardSummary {
    let total = tasks.len();
    let completed = completed_count(tasks);
    let high_priority_pending = tasks
        .iter()
        .filter(|task| task.priority == Priority::High && !task.completed)
        .count();

    DashboardSummary {
        total,
        completed,
        pending: total - completed,
        high_priority_pending,
        completion_rate: completion_rate(completed, total),
        recent: tasks.iter().take(recent_limit).cloned().collect(),
    }
}

pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| task.completed).count()
}

/// `round(completed / total * 100)` with halves rounded up; `0` when
/// `total == 0`.
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rate = (completed * 200 + total) / (2 * total);
    rate as u32
}

/// One bucket per priority, lowest first.
pub fn priority_breakdown(tasks: &[Task]) -> [PriorityBreakdown; 3] {
    let mut buckets = Priority::ALL.map(|priority| PriorityBreakdown {
        priority,
        total: 0,
        completed: 0,
    });
    for task in tasks {
        let bucket = &mut buckets[bucket_index(task.priority)];
        bucket.total += 1;
        if task.completed {
            bucket.completed += 1;
        }
    }
    buckets
}

pub fn overdue_tasks(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|task| task.is_overdue(today)).collect()
}

pub fn due_this_week(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.is_due_within_week(today))
        .collect()
}

fn bucket_index(priority: Priority) -> usize {
    usize::from(priority.rank())
}
