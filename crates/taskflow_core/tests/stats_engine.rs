use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use taskflow_core::seed::{sample_task_id, sample_tasks};
use taskflow_core::stats::summary::{self, completion_rate};
use taskflow_core::{Priority, Task, TaskDraft, TaskPatch, TaskService, RECENT_TASKS_LIMIT};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn task_due(title: &str, due: Option<NaiveDate>, completed: bool) -> Task {
    let mut draft = TaskDraft::new(title);
    draft.due_date = due;
    let mut task = Task::new(draft, date(2024, 1, 1)).unwrap();
    task.completed = completed;
    task
}

#[test]
fn completion_rate_of_empty_list_is_zero() {
    let stats = summary::compute(&[], date(2024, 1, 15));
    assert_eq!(stats.total, 0);
    assert_eq!(stats.completion_rate, 0);
    assert!(Priority::ALL
        .iter()
        .all(|priority| stats.priority(*priority).completion_rate() == 0));
}

#[test]
fn completion_rate_rounds_to_whole_percent() {
    assert_eq!(completion_rate(1, 2), 50);
    assert_eq!(completion_rate(5, 10), 50);
    assert_eq!(completion_rate(1, 3), 33);
    assert_eq!(completion_rate(2, 3), 67);
    assert_eq!(completion_rate(3, 8), 38);
    assert_eq!(completion_rate(4, 4), 100);
}

#[test]
fn ten_tasks_half_completed() {
    let tasks: Vec<Task> = (0..10)
        .map(|n| task_due(&format!("task {n}"), None, n % 2 == 0))
        .collect();
    let stats = summary::compute(&tasks, date(2024, 1, 15));

    assert_eq!(stats.total, 10);
    assert_eq!(stats.completed, 5);
    assert_eq!(stats.pending, 5);
    assert_eq!(stats.completion_rate, 50);
}

#[test]
fn overdue_requires_incomplete_and_strictly_past_due() {
    let today = date(2024, 1, 15);
    let late = task_due("late", Some(date(2024, 1, 10)), false);
    let late_done = task_due("late done", Some(date(2024, 1, 10)), true);
    let due_today = task_due("due today", Some(today), false);
    let undated = task_due("undated", None, false);

    assert!(late.is_overdue(today));
    assert!(!late_done.is_overdue(today));
    assert!(!due_today.is_overdue(today));
    assert!(!undated.is_overdue(today));

    let tasks = vec![late.clone(), late_done, due_today, undated];
    let stats = summary::compute(&tasks, today);
    assert_eq!(stats.overdue, vec![late.id]);
}

#[test]
fn due_this_week_window_is_inclusive_and_keeps_completed() {
    let today = date(2024, 1, 15);
    let tasks = vec![
        task_due("yesterday", Some(date(2024, 1, 14)), false),
        task_due("today", Some(today), true),
        task_due("last day", Some(date(2024, 1, 22)), false),
        task_due("too far", Some(date(2024, 1, 23)), false),
        task_due("undated", None, false),
    ];

    let stats = summary::compute(&tasks, today);
    assert_eq!(stats.due_this_week, vec![tasks[1].id, tasks[2].id]);
}

#[test]
fn sample_data_statistics_on_reference_date() {
    let tasks = sample_tasks().unwrap();
    let stats = summary::compute(&tasks, date(2024, 1, 15));

    assert_eq!(stats.total, 8);
    assert_eq!(stats.completed, 3);
    assert_eq!(stats.pending, 5);
    assert_eq!(stats.completion_rate, 38);
    assert_eq!(stats.overdue, vec![sample_task_id(2)]);
    let due_week: Vec<_> = [1, 4, 5, 7].into_iter().map(sample_task_id).collect();
    assert_eq!(stats.due_this_week, due_week);

    let high = stats.priority(Priority::High);
    assert_eq!((high.total, high.completed, high.completion_rate()), (3, 1, 33));
    let medium = stats.priority(Priority::Medium);
    assert_eq!((medium.total, medium.completed, medium.completion_rate()), (3, 1, 33));
    let low = stats.priority(Priority::Low);
    assert_eq!((low.total, low.completed, low.completion_rate()), (2, 1, 50));
}

#[test]
fn stats_follow_mutations() {
    let mut service = TaskService::with_sample_data().unwrap();
    let today = date(2024, 1, 15);

    service.toggle_completed(sample_task_id(2)).unwrap();
    service
        .update_task(
            sample_task_id(5),
            &TaskPatch {
                due_date: Some(Some(date(2024, 1, 1))),
                ..TaskPatch::default()
            },
        )
        .unwrap();
    let stats = service.stats(today);

    assert_eq!(stats.completed, 4);
    assert_eq!(stats.completion_rate, 50);
    assert_eq!(stats.overdue, vec![sample_task_id(5)]);
    assert_eq!(stats.due_this_week_count(), 3);
}

#[test]
fn dashboard_counts_and_recent_tasks() {
    let mut service = TaskService::with_sample_data().unwrap();
    let summary = service.dashboard();

    assert_eq!(summary.total, 8);
    assert_eq!(summary.completed, 3);
    assert_eq!(summary.pending, 5);
    assert_eq!(summary.high_priority_pending, 2);
    assert_eq!(summary.completion_rate, 38);
    assert_eq!(summary.recent.len(), RECENT_TASKS_LIMIT);
    assert_eq!(summary.recent[0].id, sample_task_id(1));

    let created = service
        .create_task_on(TaskDraft::new("Fresh"), date(2024, 1, 15))
        .unwrap();
    assert_eq!(service.dashboard().recent[0].id, created.id);
}
