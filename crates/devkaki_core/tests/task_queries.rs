use chrono::{DateTime, TimeZone, Utc};
use devkaki_core::query::views;
use devkaki_core::{Priority, StatusFilter, Task, TaskFilter, TaskType};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

/// Monday 2024-06-10 12:00.
fn now() -> DateTime<Utc> {
    at(2024, 6, 10, 12, 0)
}

fn task(id: &str, due: Option<DateTime<Utc>>) -> Task {
    let mut task = Task::new(format!("task {id}"), TaskType::Feature, Priority::Medium);
    task.id = id.to_string();
    task.due_date = due.map(|due| due.timestamp_millis());
    task
}

fn done(task: Task) -> Task {
    task.toggled(now().timestamp_millis())
}

fn ids(tasks: Vec<&Task>) -> Vec<&str> {
    tasks.into_iter().map(|task| task.id.as_str()).collect()
}

#[test]
fn due_this_morning_is_today_not_overdue() {
    let tasks = vec![task("a", Some(at(2024, 6, 10, 8, 0)))];
    assert_eq!(ids(views::today(&tasks, &now())), ["a"]);
    assert!(views::overdue(&tasks, &now()).is_empty());
}

#[test]
fn due_last_night_is_overdue_not_today() {
    let tasks = vec![task("b", Some(at(2024, 6, 9, 23, 59)))];
    assert_eq!(ids(views::overdue(&tasks, &now())), ["b"]);
    assert!(views::today(&tasks, &now()).is_empty());
}

#[test]
fn tomorrow_midnight_belongs_to_upcoming() {
    let tasks = vec![task("c", Some(at(2024, 6, 11, 0, 0)))];
    assert_eq!(ids(views::upcoming(&tasks, &now())), ["c"]);
    assert!(views::today(&tasks, &now()).is_empty());
}

#[test]
fn today_midnight_belongs_to_today() {
    let tasks = vec![task("d", Some(at(2024, 6, 10, 0, 0)))];
    assert_eq!(ids(views::today(&tasks, &now())), ["d"]);
    assert!(views::overdue(&tasks, &now()).is_empty());
}

#[test]
fn completion_only_filters_upcoming_and_overdue() {
    let tasks = vec![
        done(task("today", Some(at(2024, 6, 10, 18, 0)))),
        done(task("future", Some(at(2024, 6, 12, 9, 0)))),
        done(task("past", Some(at(2024, 6, 1, 9, 0)))),
    ];
    assert_eq!(ids(views::today(&tasks, &now())), ["today"]);
    assert!(views::upcoming(&tasks, &now()).is_empty());
    assert!(views::overdue(&tasks, &now()).is_empty());
}

#[test]
fn tasks_without_due_date_never_appear_in_time_views() {
    let tasks = vec![task("none", None)];
    assert!(views::today(&tasks, &now()).is_empty());
    assert!(views::upcoming(&tasks, &now()).is_empty());
    assert!(views::overdue(&tasks, &now()).is_empty());
    assert!(views::weekly(&tasks, &now()).is_empty());
}

#[test]
fn weekly_spans_monday_to_next_monday_exclusive() {
    let tasks = vec![
        task("sun-before", Some(at(2024, 6, 9, 23, 59))),
        task("mon", Some(at(2024, 6, 10, 0, 0))),
        done(task("sun", Some(at(2024, 6, 16, 23, 59)))),
        task("next-mon", Some(at(2024, 6, 17, 0, 0))),
    ];
    assert_eq!(ids(views::weekly(&tasks, &now())), ["mon", "sun"]);

    let sunday = at(2024, 6, 16, 20, 0);
    assert_eq!(ids(views::weekly(&tasks, &sunday)), ["mon", "sun"]);
}

#[test]
fn category_filters_match_exactly() {
    let mut bug = task("bug", None);
    bug.task_type = TaskType::Bug;
    bug.priority = Priority::High;
    let tasks = vec![bug, done(task("feature", None))];

    assert_eq!(ids(views::by_type(&tasks, TaskType::Bug)), ["bug"]);
    assert_eq!(ids(views::by_priority(&tasks, Priority::Medium)), ["feature"]);
    assert!(views::by_type(&tasks, TaskType::Review).is_empty());
    assert_eq!(ids(views::completed(&tasks)), ["feature"]);
}

#[test]
fn task_filter_combines_status_and_priority() {
    let mut high_open = task("high-open", None);
    high_open.priority = Priority::High;
    let mut high_done = done(task("high-done", None));
    high_done.priority = Priority::High;
    let low_open = {
        let mut t = task("low-open", None);
        t.priority = Priority::Low;
        t
    };
    let tasks = vec![high_open, high_done, low_open];

    assert_eq!(TaskFilter::default().apply(&tasks).len(), 3);

    let pending_high = TaskFilter {
        status: StatusFilter::Pending,
        priority: Some(Priority::High),
    };
    assert_eq!(ids(pending_high.apply(&tasks)), ["high-open"]);

    let completed = TaskFilter {
        status: StatusFilter::Completed,
        priority: None,
    };
    assert_eq!(ids(completed.apply(&tasks)), ["high-done"]);
}
