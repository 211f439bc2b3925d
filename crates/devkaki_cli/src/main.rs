//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `devkaki_core` linkage without any UI shell.
//! - Seed the starter tasks and print the dashboard numbers they produce.

use devkaki_core::query::{stats, views};
use devkaki_core::{sample_tasks, Clock, DailyProgress, ProgressSummary, SystemClock, TaskStore};

fn main() {
    println!("devkaki_core ping={}", devkaki_core::ping());
    println!("devkaki_core version={}", devkaki_core::core_version());

    let clock = SystemClock;
    let store = match TaskStore::with_tasks(clock, sample_tasks(clock.now_ms())) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to seed tasks: {err}");
            std::process::exit(1);
        }
    };

    let now = chrono::Local::now();
    let snapshot = store.snapshot();
    let today = DailyProgress::for_today(&snapshot, &now);
    let summary = ProgressSummary::compute(&snapshot, &now);

    println!(
        "today={}/{} ({}%) upcoming={} overdue={}",
        today.completed,
        today.total,
        today.percent,
        views::upcoming(&snapshot, &now).len(),
        views::overdue(&snapshot, &now).len()
    );
    println!(
        "streak={} completed={}/{} weekly={}%",
        summary.streak,
        summary.total_completed,
        summary.total_tasks,
        stats::percent(summary.weekly_ratio)
    );
    for (task_type, count) in &summary.by_type {
        println!("type.{}={count}", task_type.as_str());
    }
    for (priority, count) in &summary.by_priority {
        println!("priority.{}={count}", priority.as_str());
    }
}
