//! Settings store with snapshot export/import.
//!
//! # Responsibility
//! - Own the profile, notification and preference records for one session.
//! - Serialize all three into a single JSON snapshot and restore from one.
//!
//! # Invariants
//! - Each top-level snapshot section is decoded and validated on its own;
//!   a malformed section is skipped and never touches the current record.
//! - A blob that is not a JSON object changes nothing.
//! - `exportDate` is informational and ignored on import.
//!
//! # See also
//! - `model::settings` for field names and defaults.

use crate::model::settings::{AppPreferences, NotificationPrefs, UserProfile};
use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Suggested file name for exported snapshots.
pub const SNAPSHOT_FILE_NAME: &str = "taskflow-settings.json";

const EXPORT_DATE_KEY: &str = "exportDate";

/// Snapshot decoding/encoding failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed settings snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("settings snapshot must be a JSON object")]
    NotAnObject,
    #[error("failed to serialize settings snapshot: {0}")]
    Serialize(serde_json::Error),
}

/// Rejected settings write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("profile {field} cannot be empty")]
    EmptyField { field: &'static str },
}

/// Top-level snapshot section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSection {
    Profile,
    Notifications,
    Preferences,
}

impl SnapshotSection {
    pub const ALL: [SnapshotSection; 3] = [
        SnapshotSection::Profile,
        SnapshotSection::Notifications,
        SnapshotSection::Preferences,
    ];

    /// Key used in the JSON document.
    pub fn key(self) -> &'static str {
        match self {
            SnapshotSection::Profile => "userSettings",
            SnapshotSection::Notifications => "notificationSettings",
            SnapshotSection::Preferences => "appSettings",
        }
    }
}

impl Display for SnapshotSection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Section that was present but could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSection {
    pub section: SnapshotSection,
    pub reason: String,
}

/// Outcome of a snapshot import.
///
/// Sections absent from the blob appear in neither list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub applied: Vec<SnapshotSection>,
    pub skipped: Vec<SkippedSection>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotDocument<'a> {
    user_settings: &'a UserProfile,
    notification_settings: &'a NotificationPrefs,
    app_settings: &'a AppPreferences,
    export_date: String,
}

/// In-memory settings for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsStore {
    profile: UserProfile,
    notifications: NotificationPrefs,
    preferences: AppPreferences,
}

impl SettingsStore {
    /// Store holding the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn notifications(&self) -> &NotificationPrefs {
        &self.notifications
    }

    pub fn preferences(&self) -> &AppPreferences {
        &self.preferences
    }

    /// Replaces the profile after checking required fields.
    pub fn set_profile(&mut self, profile: UserProfile) -> Result<(), SettingsError> {
        validate_profile(&profile)?;
        self.profile = profile;
        info!("event=settings_save module=settings status=ok section=profile");
        Ok(())
    }

    pub fn set_notifications(&mut self, notifications: NotificationPrefs) {
        self.notifications = notifications;
        info!("event=settings_save module=settings status=ok section=notifications");
    }

    pub fn set_preferences(&mut self, preferences: AppPreferences) {
        self.preferences = preferences;
        info!("event=settings_save module=settings status=ok section=preferences");
    }

    /// Restores all three records to their defaults.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
        info!("event=settings_reset module=settings status=ok");
    }

    /// Exports a pretty-printed snapshot stamped with the current time.
    pub fn export_snapshot(&self) -> Result<String, SnapshotError> {
        self.export_snapshot_at(Utc::now())
    }

    /// Exports a pretty-printed snapshot stamped with `exported_at`.
    ///
    /// Output is byte-identical for identical settings and timestamp.
    pub fn export_snapshot_at(&self, exported_at: DateTime<Utc>) -> Result<String, SnapshotError> {
        let document = SnapshotDocument {
            user_settings: &self.profile,
            notification_settings: &self.notifications,
            app_settings: &self.preferences,
            export_date: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let blob = serde_json::to_string_pretty(&document).map_err(SnapshotError::Serialize)?;
        info!(
            "event=settings_export module=settings status=ok bytes={}",
            blob.len()
        );
        Ok(blob)
    }

    /// Applies every well-formed section present in `blob`.
    ///
    /// # Contract
    /// - Invalid JSON or a non-object top level fails and changes nothing.
    /// - A missing or `null` section leaves the current record untouched.
    /// - A malformed section is reported in `ImportReport::skipped` and
    ///   leaves the current record untouched.
    /// - Unknown top-level keys, including `exportDate`, are ignored.
    pub fn import_snapshot(&mut self, blob: &str) -> Result<ImportReport, SnapshotError> {
        let document: Value = serde_json::from_str(blob).inspect_err(|err| {
            warn!("event=settings_import module=settings status=error error_code=parse_failed error={err}");
        })?;
        let Value::Object(object) = document else {
            warn!("event=settings_import module=settings status=error error_code=not_an_object");
            return Err(SnapshotError::NotAnObject);
        };

        let mut report = ImportReport::default();

        let profile = decode_section::<UserProfile>(&object, SnapshotSection::Profile)
            .and_then(|profile| match profile {
                Some(profile) => validate_profile(&profile)
                    .map(|()| Some(profile))
                    .map_err(|err| err.to_string()),
                None => Ok(None),
            });
        if let Some(profile) = record_outcome(&mut report, SnapshotSection::Profile, profile) {
            self.profile = profile;
        }

        let notifications =
            decode_section::<NotificationPrefs>(&object, SnapshotSection::Notifications);
        if let Some(notifications) =
            record_outcome(&mut report, SnapshotSection::Notifications, notifications)
        {
            self.notifications = notifications;
        }

        let preferences = decode_section::<AppPreferences>(&object, SnapshotSection::Preferences);
        if let Some(preferences) =
            record_outcome(&mut report, SnapshotSection::Preferences, preferences)
        {
            self.preferences = preferences;
        }

        info!(
            "event=settings_import module=settings status=ok applied={} skipped={} has_export_date={}",
            report.applied.len(),
            report.skipped.len(),
            object.contains_key(EXPORT_DATE_KEY)
        );
        for skipped in &report.skipped {
            warn!(
                "event=settings_import_section module=settings status=skipped section={}",
                skipped.section
            );
        }
        Ok(report)
    }
}

// Ok(None) means the section is absent or null.
fn decode_section<T: DeserializeOwned>(
    object: &Map<String, Value>,
    section: SnapshotSection,
) -> Result<Option<T>, String> {
    match object.get(section.key()) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|err| err.to_string()),
    }
}

fn record_outcome<T>(
    report: &mut ImportReport,
    section: SnapshotSection,
    outcome: Result<Option<T>, String>,
) -> Option<T> {
    match outcome {
        Ok(Some(record)) => {
            report.applied.push(section);
            Some(record)
        }
        Ok(None) => None,
        Err(reason) => {
            report.skipped.push(SkippedSection { section, reason });
            None
        }
    }
}

fn validate_profile(profile: &UserProfile) -> Result<(), SettingsError> {
    if profile.name.trim().is_empty() {
        return Err(SettingsError::EmptyField { field: "name" });
    }
    if profile.email.trim().is_empty() {
        return Err(SettingsError::EmptyField { field: "email" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{SettingsError, SettingsStore, SnapshotSection};
    use crate::model::settings::UserProfile;
    use chrono::{TimeZone, Utc};

    #[test]
    fn export_is_deterministic_for_fixed_timestamp() {
        let store = SettingsStore::new();
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();

        let first = store.export_snapshot_at(at).unwrap();
        let second = store.export_snapshot_at(at).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("\"exportDate\": \"2024-01-15T09:30:00.000Z\""));
        assert!(first.starts_with("{\n  \"userSettings\""));
    }

    #[test]
    fn set_profile_requires_name_and_email() {
        let mut store = SettingsStore::new();
        let profile = UserProfile {
            email: " ".to_string(),
            ..UserProfile::default()
        };

        let err = store.set_profile(profile).unwrap_err();
        assert_eq!(err, SettingsError::EmptyField { field: "email" });
        assert_eq!(store, SettingsStore::new());
    }

    #[test]
    fn section_keys_match_export_file() {
        let keys: Vec<_> = SnapshotSection::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(keys, ["userSettings", "notificationSettings", "appSettings"]);
    }
}
