//! Core domain logic for TaskFlow.
//! This crate is the single source of truth for task and settings invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod seed;
pub mod service;
pub mod stats;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::settings::{AppPreferences, NotificationPrefs, TaskSortOrder, Theme, UserProfile};
pub use model::task::{
    parse_date_input, Priority, RawTaskInput, Task, TaskDraft, TaskId, TaskPatch,
    TaskValidationError, UnknownVariantError, DATE_FORMAT,
};
pub use repo::task_repo::{InMemoryTaskRepository, RepoError, RepoResult, TaskRepository};
pub use search::filter::{matches, PriorityFilter, StatusFilter, TaskFilter};
pub use search::order::sort_tasks;
pub use service::settings_service::{
    ImportReport, SettingsError, SettingsStore, SkippedSection, SnapshotError, SnapshotSection,
    SNAPSHOT_FILE_NAME,
};
pub use service::task_service::TaskService;
pub use stats::summary::{DashboardSummary, PriorityBreakdown, TaskStats, RECENT_TASKS_LIMIT};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
