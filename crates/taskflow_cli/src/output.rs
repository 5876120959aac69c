use std::io::{self, Write};
use taskflow_core::{
    AppPreferences, DashboardSummary, ImportReport, NotificationPrefs, Priority, Task, TaskStats,
    UserProfile,
};

pub fn write_task(out: &mut impl Write, task: &Task) -> io::Result<()> {
    let mark = if task.completed { 'x' } else { ' ' };
    let due = task
        .due_date
        .map(|due| due.to_string())
        .unwrap_or_else(|| "-".to_string());
    writeln!(
        out,
        "[{mark}] {}  {:<6}  due {:<10}  {}",
        task.id,
        task.priority.as_str(),
        due,
        task.title
    )
}

pub fn write_tasks(out: &mut impl Write, tasks: &[&Task]) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(out, "No tasks.");
    }
    for task in tasks {
        write_task(out, task)?;
    }
    Ok(())
}

pub fn write_stats(out: &mut impl Write, stats: &TaskStats) -> io::Result<()> {
    writeln!(out, "Total:          {}", stats.total)?;
    writeln!(
        out,
        "Completed:      {} ({}%)",
        stats.completed, stats.completion_rate
    )?;
    writeln!(out, "Pending:        {}", stats.pending)?;
    for priority in Priority::ALL.into_iter().rev() {
        let bucket = stats.priority(priority);
        writeln!(
            out,
            "Priority {:<6} {} tasks, {} completed ({}%)",
            priority.as_str(),
            bucket.total,
            bucket.completed,
            bucket.completion_rate()
        )?;
    }
    writeln!(out, "Overdue:        {}", stats.overdue_count())?;
    writeln!(out, "Due this week:  {}", stats.due_this_week_count())
}

pub fn write_dashboard(out: &mut impl Write, summary: &DashboardSummary) -> io::Result<()> {
    writeln!(out, "Total:               {}", summary.total)?;
    writeln!(out, "Completed:           {}", summary.completed)?;
    writeln!(out, "Pending:             {}", summary.pending)?;
    writeln!(out, "High priority open:  {}", summary.high_priority_pending)?;
    writeln!(out, "Completion rate:     {}%", summary.completion_rate)?;
    writeln!(out, "Recent tasks:")?;
    let recent: Vec<&Task> = summary.recent.iter().collect();
    write_tasks(out, &recent)
}

pub fn write_settings(
    out: &mut impl Write,
    profile: &UserProfile,
    notifications: &NotificationPrefs,
    preferences: &AppPreferences,
) -> io::Result<()> {
    writeln!(out, "Profile")?;
    writeln!(out, "  name:      {}", profile.name)?;
    writeln!(out, "  email:     {}", profile.email)?;
    writeln!(out, "  avatar:    {}", profile.avatar)?;
    writeln!(out, "  timezone:  {}", profile.timezone)?;
    writeln!(out, "  language:  {}", profile.language)?;
    writeln!(out, "Notifications")?;
    writeln!(out, "  email:           {}", notifications.email_notifications)?;
    writeln!(out, "  push:            {}", notifications.push_notifications)?;
    writeln!(out, "  task reminders:  {}", notifications.task_reminders)?;
    writeln!(out, "  weekly report:   {}", notifications.weekly_report)?;
    writeln!(out, "  due date alerts: {}", notifications.due_date_alerts)?;
    writeln!(out, "Preferences")?;
    writeln!(out, "  theme:            {}", preferences.theme)?;
    writeln!(out, "  default priority: {}", preferences.default_priority)?;
    writeln!(out, "  auto archive:     {}", preferences.auto_archive)?;
    writeln!(out, "  show completed:   {}", preferences.show_completed_tasks)?;
    writeln!(out, "  sort order:       {}", preferences.task_sort_order)
}

pub fn write_import_report(out: &mut impl Write, report: &ImportReport) -> io::Result<()> {
    for section in &report.applied {
        writeln!(out, "applied {section}")?;
    }
    for skipped in &report.skipped {
        writeln!(out, "skipped {}: {}", skipped.section, skipped.reason)?;
    }
    if report.applied.is_empty() && report.skipped.is_empty() {
        writeln!(out, "no settings sections found")?;
    }
    Ok(())
}
