//! Display ordering for task lists.
//!
//! # Invariants
//! - Sorting is stable; ties keep collection order.
//! - Tasks without a due date sort after every dated task.

use crate::model::settings::TaskSortOrder;
use crate::model::task::Task;
use std::cmp::{Ordering, Reverse};

/// Sorts a task view in place according to the chosen preference.
pub fn sort_tasks(tasks: &mut [&Task], order: TaskSortOrder) {
    match order {
        TaskSortOrder::DueDate => tasks.sort_by(|a, b| compare_due_dates(a, b)),
        TaskSortOrder::Priority => tasks.sort_by_key(|task| Reverse(task.priority.rank())),
        TaskSortOrder::Created => tasks.sort_by_key(|task| Reverse(task.created_at)),
        TaskSortOrder::Alphabetical => tasks.sort_by_cached_key(|task| task.title.to_lowercase()),
    }
}

fn compare_due_dates(a: &Task, b: &Task) -> Ordering {
    match (a.due_date, b.due_date) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
