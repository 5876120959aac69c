//! Command execution against one in-process session.
//!
//! # Responsibility
//! - Translate parsed commands into core service calls.
//! - Render results to the provided writer.
//!
//! # Invariants
//! - Task ids may be given in full or as a unique prefix.
//! - Nothing outlives the process; every run starts from a fresh session.

use crate::cli::{Commands, SettingsCommand};
use crate::output;
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use log::info;
use std::fs;
use std::io::Write;
use std::path::Path;
use taskflow_core::{
    parse_date_input, Priority, RawTaskInput, SettingsStore, TaskDraft, TaskFilter, TaskId,
    TaskPatch, TaskService, TaskSortOrder,
};

/// Task list, settings and reference date for one invocation.
pub struct Session {
    pub tasks: TaskService,
    pub settings: SettingsStore,
    pub today: NaiveDate,
}

impl Session {
    pub fn new(seed_sample_data: bool, today: NaiveDate) -> Result<Self> {
        let tasks = if seed_sample_data {
            TaskService::with_sample_data().context("failed to load sample tasks")?
        } else {
            TaskService::in_memory()
        };
        Ok(Self {
            tasks,
            settings: SettingsStore::new(),
            today,
        })
    }

    pub fn execute(&mut self, command: Commands, out: &mut impl Write) -> Result<()> {
        match command {
            Commands::List {
                search,
                priority,
                status,
                sort,
                hide_completed,
            } => self.list(&search, &priority, &status, sort.as_deref(), hide_completed, out),
            Commands::Add {
                title,
                description,
                priority,
                due,
            } => {
                let raw = RawTaskInput {
                    title,
                    description,
                    priority,
                    due_date: due,
                };
                let default_priority = self.settings.preferences().default_priority;
                let draft = TaskDraft::from_raw(&raw, default_priority)?;
                let task = self.tasks.create_task_on(draft, self.today)?;
                writeln!(out, "created {}", task.id)?;
                self.list("", "all", "all", None, false, out)
            }
            Commands::Edit {
                id,
                title,
                description,
                priority,
                due,
            } => {
                let id = self.resolve_id(&id)?;
                let patch = build_patch(title, description, priority, due)?;
                if patch.is_empty() {
                    bail!("nothing to change; pass at least one field");
                }
                let task = self.tasks.update_task(id, &patch)?;
                output::write_task(out, &task)?;
                Ok(())
            }
            Commands::Toggle { id } => {
                let id = self.resolve_id(&id)?;
                let task = self.tasks.toggle_completed(id)?;
                output::write_task(out, &task)?;
                Ok(())
            }
            Commands::Remove { id } => {
                let id = self.resolve_id(&id)?;
                let task = self.tasks.remove_task(id)?;
                writeln!(out, "removed {} {}", task.id, task.title)?;
                Ok(())
            }
            Commands::Clear => {
                let removed = self.tasks.clear_tasks();
                writeln!(out, "removed {removed} tasks")?;
                Ok(())
            }
            Commands::Stats => {
                output::write_stats(out, &self.tasks.stats(self.today))?;
                Ok(())
            }
            Commands::Dashboard => {
                output::write_dashboard(out, &self.tasks.dashboard())?;
                Ok(())
            }
            Commands::Settings { action } => self.settings_command(action, out),
        }
    }

    fn list(
        &self,
        search: &str,
        priority: &str,
        status: &str,
        sort: Option<&str>,
        hide_completed: bool,
        out: &mut impl Write,
    ) -> Result<()> {
        let filter = TaskFilter::parse(search, priority, status)?;
        let mut prefs = *self.settings.preferences();
        if let Some(sort) = sort {
            prefs.task_sort_order = sort.parse::<TaskSortOrder>()?;
        }
        if hide_completed {
            prefs.show_completed_tasks = false;
        }
        let tasks = self.tasks.visible_tasks(&filter, &prefs);
        output::write_tasks(out, &tasks)?;
        Ok(())
    }

    fn settings_command(&mut self, action: SettingsCommand, out: &mut impl Write) -> Result<()> {
        match action {
            SettingsCommand::Show => self.show_settings(out),
            SettingsCommand::Export { output: path } => {
                let snapshot = self.settings.export_snapshot()?;
                match path {
                    Some(path) => {
                        write_file(&path, &snapshot)?;
                        writeln!(out, "exported settings to {}", path.display())?;
                    }
                    None => writeln!(out, "{snapshot}")?,
                }
                Ok(())
            }
            SettingsCommand::Import { path } => {
                let blob = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read snapshot {}", path.display()))?;
                let report = self
                    .settings
                    .import_snapshot(&blob)
                    .with_context(|| format!("failed to import snapshot {}", path.display()))?;
                output::write_import_report(out, &report)?;
                self.show_settings(out)
            }
            SettingsCommand::Reset => {
                self.settings.reset_to_defaults();
                self.show_settings(out)
            }
        }
    }

    fn show_settings(&self, out: &mut impl Write) -> Result<()> {
        output::write_settings(
            out,
            self.settings.profile(),
            self.settings.notifications(),
            self.settings.preferences(),
        )?;
        Ok(())
    }

    /// Accepts a full id or a prefix matching exactly one task.
    fn resolve_id(&self, input: &str) -> Result<TaskId> {
        let needle = input.trim().to_ascii_lowercase();
        if needle.is_empty() {
            bail!("task id cannot be empty");
        }
        if let Ok(id) = needle.parse::<TaskId>() {
            return Ok(id);
        }

        let mut candidates = self
            .tasks
            .list_tasks()
            .iter()
            .filter(|task| task.id.to_string().starts_with(&needle))
            .map(|task| task.id);
        match (candidates.next(), candidates.next()) {
            (Some(id), None) => Ok(id),
            (None, _) => bail!("no task matches id `{input}`"),
            (Some(_), Some(_)) => bail!("id prefix `{input}` matches more than one task"),
        }
    }
}

fn build_patch(
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    due: Option<String>,
) -> Result<TaskPatch> {
    let priority = priority
        .map(|value| value.parse::<Priority>())
        .transpose()?;
    let due_date = due
        .map(|value| parse_date_input("due date", &value))
        .transpose()?;
    Ok(TaskPatch {
        title,
        description: description.map(Some),
        completed: None,
        priority,
        due_date,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .with_context(|| format!("failed to write snapshot {}", path.display()))?;
    info!(
        "event=settings_export_file module=cli status=ok path={}",
        path.display()
    );
    Ok(())
}
