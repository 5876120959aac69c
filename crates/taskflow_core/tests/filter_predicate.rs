use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use taskflow_core::seed::{sample_task_id, sample_tasks};
use taskflow_core::{
    matches, sort_tasks, AppPreferences, Priority, PriorityFilter, StatusFilter, Task, TaskDraft,
    TaskFilter, TaskId, TaskService, TaskSortOrder,
};

fn ids(tasks: &[&Task]) -> Vec<TaskId> {
    tasks.iter().map(|task| task.id).collect()
}

fn sample_ids(numbers: &[u8]) -> Vec<TaskId> {
    numbers.iter().copied().map(sample_task_id).collect()
}

#[test]
fn empty_query_with_all_filters_accepts_every_task() {
    let tasks = sample_tasks().unwrap();
    assert!(tasks
        .iter()
        .all(|task| matches(task, "", PriorityFilter::All, StatusFilter::All)));
    assert_eq!(TaskFilter::all().apply(&tasks).len(), tasks.len());
}

#[test]
fn query_is_case_insensitive_over_title_and_description() {
    let tasks = sample_tasks().unwrap();

    let by_title = TaskFilter::parse("RAPPORT", "all", "all").unwrap();
    assert_eq!(ids(&by_title.apply(&tasks)), sample_ids(&[1]));

    let by_description = TaskFilter::parse("abc", "all", "all").unwrap();
    assert_eq!(ids(&by_description.apply(&tasks)), sample_ids(&[2]));

    let accented = TaskFilter::parse("ÉQUIPE", "all", "all").unwrap();
    assert_eq!(ids(&accented.apply(&tasks)), sample_ids(&[4]));
}

#[test]
fn task_without_description_matches_on_title_only() {
    let created = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let task = Task::new(TaskDraft::new("Buy milk"), created).unwrap();

    assert!(matches(&task, "MILK", PriorityFilter::All, StatusFilter::All));
    assert!(!matches(&task, "bread", PriorityFilter::All, StatusFilter::All));
}

#[test]
fn predicates_combine_with_logical_and() {
    let tasks = sample_tasks().unwrap();

    let high_pending = TaskFilter::parse("", "high", "pending").unwrap();
    assert_eq!(ids(&high_pending.apply(&tasks)), sample_ids(&[1, 2]));

    let high_completed = TaskFilter::parse("", "high", "completed").unwrap();
    assert_eq!(ids(&high_completed.apply(&tasks)), sample_ids(&[6]));

    let low_with_text = TaskFilter::parse("documentation", "low", "all").unwrap();
    assert_eq!(ids(&low_with_text.apply(&tasks)), sample_ids(&[5]));

    let contradictory = TaskFilter::parse("documentation", "high", "all").unwrap();
    assert!(contradictory.apply(&tasks).is_empty());
}

#[test]
fn filter_tokens_reject_unknown_values() {
    let err = TaskFilter::parse("", "urgent", "all").unwrap_err();
    assert_eq!(err.value, "urgent");

    let err = TaskFilter::parse("", "all", "archived").unwrap_err();
    assert_eq!(err.value, "archived");
}

#[test]
fn filter_result_keeps_collection_order() {
    let tasks = sample_tasks().unwrap();
    let medium = TaskFilter {
        priority: PriorityFilter::Only(Priority::Medium),
        ..TaskFilter::all()
    };
    assert_eq!(ids(&medium.apply(&tasks)), sample_ids(&[3, 4, 7]));
}

#[test]
fn visible_tasks_apply_preferences_after_filtering() {
    let service = TaskService::with_sample_data().unwrap();
    let prefs = AppPreferences {
        show_completed_tasks: false,
        task_sort_order: TaskSortOrder::Priority,
        ..AppPreferences::default()
    };

    let visible = service.visible_tasks(&TaskFilter::all(), &prefs);
    assert_eq!(ids(&visible), sample_ids(&[1, 2, 4, 7, 5]));
}

#[test]
fn sort_orders_are_stable_and_total() {
    let tasks = sample_tasks().unwrap();
    let mut view: Vec<&Task> = tasks.iter().collect();

    sort_tasks(&mut view, TaskSortOrder::DueDate);
    assert_eq!(ids(&view), sample_ids(&[8, 6, 3, 2, 1, 4, 7, 5]));

    sort_tasks(&mut view, TaskSortOrder::Created);
    assert_eq!(ids(&view), sample_ids(&[5, 4, 1, 7, 2, 3, 6, 8]));
}
