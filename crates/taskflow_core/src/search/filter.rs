//! Text search and equality filters over the task collection.
//!
//! # Responsibility
//! - Decide whether one task passes the query, priority and status filters.
//! - Parse raw view-layer filter tokens into closed types.
//!
//! # Invariants
//! - Matching is pure; the task is never mutated.
//! - An empty query with `All`/`All` filters matches every task.
//! - The filtered view is recomputed from the full collection on each call.

use crate::model::task::{Priority, Task, UnknownVariantError};
use std::str::FromStr;

/// Priority dropdown value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn accepts(self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(wanted) => wanted == priority,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(PriorityFilter::All);
        }
        value.parse().map(PriorityFilter::Only).map_err(|_| {
            UnknownVariantError::new("priority filter", value, "all|low|medium|high")
        })
    }
}

/// Completion-state dropdown value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    pub fn accepts(self, completed: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => completed,
            StatusFilter::Pending => !completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "completed" => Ok(StatusFilter::Completed),
            "pending" => Ok(StatusFilter::Pending),
            _ => Err(UnknownVariantError::new(
                "status filter",
                value,
                "all|completed|pending",
            )),
        }
    }
}

/// Combined search box and dropdown state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Raw search text; matched case-insensitively.
    pub query: String,
    pub priority: PriorityFilter,
    pub status: StatusFilter,
}

impl TaskFilter {
    /// Filter that lets every task through.
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a filter from untrusted view-layer strings.
    pub fn parse(query: &str, priority: &str, status: &str) -> Result<Self, UnknownVariantError> {
        Ok(Self {
            query: query.to_string(),
            priority: priority.parse()?,
            status: status.parse()?,
        })
    }

    pub fn matches(&self, task: &Task) -> bool {
        matches(task, &self.query, self.priority, self.status)
    }

    /// Tasks passing the filter, in collection order.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        let needle = self.query.to_lowercase();
        tasks
            .iter()
            .filter(|task| {
                matches_query(task, &needle)
                    && self.priority.accepts(task.priority)
                    && self.status.accepts(task.completed)
            })
            .collect()
    }
}

/// Logical AND of the text, priority and status predicates.
pub fn matches(
    task: &Task,
    query: &str,
    priority: PriorityFilter,
    status: StatusFilter,
) -> bool {
    matches_query(task, &query.to_lowercase())
        && priority.accepts(task.priority)
        && status.accepts(task.completed)
}

// `needle` must already be lowercased.
fn matches_query(task: &Task, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    task.title.to_lowercase().contains(needle)
        || task
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::{matches, PriorityFilter, StatusFilter, TaskFilter};
    use crate::model::task::{Priority, Task, TaskDraft};
    use chrono::NaiveDate;

    fn task(title: &str, description: &str, priority: Priority, completed: bool) -> Task {
        let created = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let draft = TaskDraft::new(title)
            .description(description)
            .priority(priority);
        let mut task = Task::new(draft, created).unwrap();
        task.completed = completed;
        task
    }

    #[test]
    fn query_matches_title_or_description_ignoring_case() {
        let t = task("Préparer la présentation", "Client ABC", Priority::High, false);

        assert!(matches(&t, "PRÉSENTATION", PriorityFilter::All, StatusFilter::All));
        assert!(matches(&t, "abc", PriorityFilter::All, StatusFilter::All));
        assert!(!matches(&t, "rapport", PriorityFilter::All, StatusFilter::All));
    }

    #[test]
    fn missing_description_only_matches_on_title() {
        let created = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let t = Task::new(TaskDraft::new("Backup"), created).unwrap();

        assert!(matches(&t, "back", PriorityFilter::All, StatusFilter::All));
        assert!(!matches(&t, "data", PriorityFilter::All, StatusFilter::All));
    }

    #[test]
    fn filters_are_combined_with_and() {
        let t = task("Docs", "", Priority::Low, true);

        assert!(matches(&t, "", PriorityFilter::Only(Priority::Low), StatusFilter::Completed));
        assert!(!matches(&t, "", PriorityFilter::Only(Priority::High), StatusFilter::Completed));
        assert!(!matches(&t, "", PriorityFilter::Only(Priority::Low), StatusFilter::Pending));
        assert!(!matches(&t, "zzz", PriorityFilter::Only(Priority::Low), StatusFilter::Completed));
    }

    #[test]
    fn parse_accepts_dropdown_tokens() {
        let filter = TaskFilter::parse("abc", "high", "pending").unwrap();
        assert_eq!(filter.priority, PriorityFilter::Only(Priority::High));
        assert_eq!(filter.status, StatusFilter::Pending);

        let filter = TaskFilter::parse("", "all", "ALL").unwrap();
        assert_eq!(filter, TaskFilter::all());
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        let err = TaskFilter::parse("", "urgent", "all").unwrap_err();
        assert_eq!(err.kind, "priority filter");

        let err = TaskFilter::parse("", "all", "archived").unwrap_err();
        assert_eq!(err.kind, "status filter");
    }

    #[test]
    fn apply_keeps_collection_order() {
        let tasks = vec![
            task("b one", "", Priority::Low, false),
            task("a two", "", Priority::Low, false),
            task("c three", "", Priority::High, false),
        ];
        let filter = TaskFilter {
            priority: PriorityFilter::Only(Priority::Low),
            ..TaskFilter::all()
        };

        let matched = filter.apply(&tasks);
        let titles: Vec<_> = matched.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["b one", "a two"]);
    }
}
