//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record held by the task store.
//! - Convert raw view-layer input into validated drafts and patches.
//!
//! # Invariants
//! - `id` is stable, non-nil and never reused for another task.
//! - `title` is never blank (whitespace-only counts as blank).
//! - `created_at` is set once at creation and never changes.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Date format used for every date crossing the view boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stable identifier for every task in a store.
pub type TaskId = Uuid;

/// Validation failure for task construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskValidationError {
    #[error("task title cannot be empty")]
    EmptyTitle,
    #[error("task id cannot be nil")]
    NilId,
    #[error("invalid {field} `{value}`: expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error(transparent)]
    UnknownValue(#[from] UnknownVariantError),
}

/// Raised when a view-layer token does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`; expected {expected}")]
pub struct UnknownVariantError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl UnknownVariantError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

/// Ordinal task classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Sort weight; higher means more urgent.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let token = value.trim();
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| UnknownVariantError::new("priority", value, "low|medium|high"))
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Assigned at creation; immutable.
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: Priority,
    /// `None` when the task has no deadline.
    pub due_date: Option<NaiveDate>,
    /// Assigned at creation; immutable.
    pub created_at: NaiveDate,
}

impl Task {
    /// Creates a pending task with a freshly generated id.
    ///
    /// # Errors
    /// - `EmptyTitle` when the draft title is blank.
    pub fn new(draft: TaskDraft, created_at: NaiveDate) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), draft, created_at)
    }

    /// Creates a pending task with a caller-provided id.
    ///
    /// Used by seed data and callers that already own an identity.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyTitle` when the draft title is blank.
    pub fn with_id(
        id: TaskId,
        draft: TaskDraft,
        created_at: NaiveDate,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            title: draft.title,
            description: draft.description,
            completed: false,
            priority: draft.priority,
            due_date: draft.due_date,
            created_at,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        validate_title(&self.title)
    }

    /// Incomplete and due strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }

    /// Due within `[today, today + 7 days]`, whatever the completion state.
    ///
    /// Near the end of the calendar the window is open-ended.
    pub fn is_due_within_week(&self, today: NaiveDate) -> bool {
        let week_end = today.checked_add_days(Days::new(7));
        self.due_date
            .is_some_and(|due| due >= today && week_end.map_or(true, |end| due <= end))
    }
}

/// Create input for a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Draft with medium priority and no description or due date.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Draft using the preferred default priority for new tasks.
    pub fn with_defaults(
        title: impl Into<String>,
        prefs: &crate::model::settings::AppPreferences,
    ) -> Self {
        Self::new(title).priority(prefs.default_priority)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = normalize_description(description.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Builds a draft from untrusted form strings.
    ///
    /// Blank `priority` falls back to `default_priority`; blank
    /// `description` and `due_date` become `None`.
    pub fn from_raw(
        raw: &RawTaskInput,
        default_priority: Priority,
    ) -> Result<Self, TaskValidationError> {
        validate_title(&raw.title)?;
        let priority = if raw.priority.trim().is_empty() {
            default_priority
        } else {
            raw.priority.parse()?
        };

        Ok(Self {
            title: raw.title.clone(),
            description: normalize_description(raw.description.clone()),
            priority,
            due_date: parse_date_input("due date", &raw.due_date)?,
        })
    }
}

/// Untrusted task form values as typed by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTaskInput {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: String,
}

/// Partial update; `None` leaves the field untouched.
///
/// `id` and `created_at` are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    /// `Some(None)` clears the due date.
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }

    /// Merges the patch into `task`.
    ///
    /// Validates before touching anything, so a rejected patch leaves
    /// `task` unchanged.
    pub fn apply_to(&self, task: &mut Task) -> Result<(), TaskValidationError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }

        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone().and_then(normalize_description);
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        Ok(())
    }
}

/// Parses an ISO date typed at the view boundary.
///
/// Blank input means "unset" and yields `Ok(None)`.
pub fn parse_date_input(
    field: &'static str,
    value: &str,
) -> Result<Option<NaiveDate>, TaskValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| TaskValidationError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

fn validate_title(title: &str) -> Result<(), TaskValidationError> {
    if title.trim().is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(())
}

fn normalize_description(description: String) -> Option<String> {
    if description.trim().is_empty() {
        None
    } else {
        Some(description)
    }
}
