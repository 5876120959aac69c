//! Settings records: user profile, notification toggles and app preferences.
//!
//! # Responsibility
//! - Define the three independent settings records and their defaults.
//! - Own the camelCase wire naming shared with the export file.
//!
//! # Invariants
//! - Records are flat; no record references a task.
//! - Deserialization requires every field, so a partial section is rejected
//!   rather than silently filled.

use crate::model::task::{Priority, UnknownVariantError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Identity shown on the profile tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Avatar URL; empty when unset.
    pub avatar: String,
    /// IANA zone name, for example `Europe/Paris`.
    pub timezone: String,
    /// Two-letter language code.
    pub language: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Jean Dupont".to_string(),
            email: "jean.dupont@email.com".to_string(),
            avatar: String::new(),
            timezone: "Europe/Paris".to_string(),
            language: "fr".to_string(),
        }
    }
}

/// Notification toggles. Nothing is delivered; these are preferences only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefs {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub task_reminders: bool,
    pub weekly_report: bool,
    pub due_date_alerts: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: false,
            task_reminders: true,
            weekly_report: true,
            due_date_alerts: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let token = value.trim();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| UnknownVariantError::new("theme", value, "light|dark|system"))
    }
}

/// Ordering applied to the visible task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskSortOrder {
    #[default]
    DueDate,
    Priority,
    Created,
    Alphabetical,
}

impl TaskSortOrder {
    pub const ALL: [TaskSortOrder; 4] = [
        TaskSortOrder::DueDate,
        TaskSortOrder::Priority,
        TaskSortOrder::Created,
        TaskSortOrder::Alphabetical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskSortOrder::DueDate => "dueDate",
            TaskSortOrder::Priority => "priority",
            TaskSortOrder::Created => "created",
            TaskSortOrder::Alphabetical => "alphabetical",
        }
    }
}

impl Display for TaskSortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskSortOrder {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let token = value.trim();
        TaskSortOrder::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                UnknownVariantError::new(
                    "sort order",
                    value,
                    "dueDate|priority|created|alphabetical",
                )
            })
    }
}

/// Application behaviour preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppPreferences {
    pub theme: Theme,
    /// Priority preselected for new tasks.
    pub default_priority: Priority,
    pub auto_archive: bool,
    pub show_completed_tasks: bool,
    pub task_sort_order: TaskSortOrder,
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            default_priority: Priority::Medium,
            auto_archive: false,
            show_completed_tasks: true,
            task_sort_order: TaskSortOrder::DueDate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppPreferences, NotificationPrefs, TaskSortOrder, Theme};

    #[test]
    fn sort_order_tokens_match_wire_names() {
        for order in TaskSortOrder::ALL {
            let wire = serde_json::to_value(order).unwrap();
            assert_eq!(wire, order.as_str());
            assert_eq!(order.as_str().parse::<TaskSortOrder>().unwrap(), order);
        }
        assert_eq!(
            "DUEDATE".parse::<TaskSortOrder>().unwrap(),
            TaskSortOrder::DueDate
        );
    }

    #[test]
    fn theme_rejects_unknown_token() {
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert_eq!(err.kind, "theme");
        assert_eq!(err.value, "sepia");
    }

    #[test]
    fn preferences_use_camel_case_fields() {
        let json = serde_json::to_value(AppPreferences::default()).unwrap();
        assert_eq!(json["defaultPriority"], "medium");
        assert_eq!(json["showCompletedTasks"], true);
        assert_eq!(json["taskSortOrder"], "dueDate");
    }

    #[test]
    fn partial_notification_section_is_rejected() {
        let value = serde_json::json!({ "emailNotifications": false });
        assert!(serde_json::from_value::<NotificationPrefs>(value).is_err());
    }
}
