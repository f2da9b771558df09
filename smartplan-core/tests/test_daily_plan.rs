use chrono::{Duration, NaiveDate, TimeZone, Utc};
use smartplan_core::{
    analyze, build_schedule, prioritize, ConfigError, Priority, Task, TaskStatus, UserPreferences,
    NO_TASKS_INSIGHT,
};

/// A day's export from the task store, as the web app hands it over.
const STORE_EXPORT: &str = r#"[
  {"id": "inbox", "title": "Clear inbox", "priority": "low", "status": "todo",
   "estimatedMinutes": 20},
  {"id": "deploy", "title": "Fix failed deploy", "priority": "urgent", "status": "in_progress",
   "estimatedMinutes": 40},
  {"id": "slides", "title": "Quarterly slides", "priority": "high", "status": "todo",
   "estimatedMinutes": 120, "dueDate": "2026-03-04T17:00:00Z"},
  {"id": "review", "title": "Review PR", "priority": "high", "status": "todo",
   "estimatedMinutes": 30, "dueDate": "2026-03-03T12:00:00Z"},
  {"id": "standup", "title": "Standup notes", "priority": "medium", "status": "completed",
   "estimatedMinutes": 10, "actualMinutes": 15, "completedAt": "2026-03-02T09:20:00Z"},
  {"id": "budget", "title": "Budget sheet", "priority": "medium", "status": "todo",
   "description": "Q2 numbers", "tags": ["finance"]}
]"#;

fn store_tasks() -> Vec<Task> {
    serde_json::from_str(STORE_EXPORT).unwrap()
}

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_prioritize_store_export() {
    let tasks = store_tasks();
    let ordered = prioritize(&tasks);
    assert_eq!(
        ids(&ordered),
        vec!["deploy", "review", "slides", "standup", "budget", "inbox"]
    );
    // Input untouched.
    assert_eq!(ids(&tasks)[0], "inbox");
}

#[test]
fn test_schedule_store_export() {
    let tasks = store_tasks();
    let prefs = UserPreferences::new("09:00", "12:00", 50, 10);
    let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let s = build_schedule(&tasks, &prefs, date).unwrap();

    let plan: Vec<String> = s
        .slots
        .iter()
        .map(|slot| match slot.task() {
            Some(t) => format!("{}-{} {}", slot.start_time, slot.end_time, t.id),
            None => format!("{}-{} break", slot.start_time, slot.end_time),
        })
        .collect();
    assert_eq!(
        plan,
        vec![
            "09:00-09:40 deploy",
            "09:40-09:50 break",
            "09:50-10:20 review",
            "10:20-10:30 break",
            "10:30-11:20 slides",
            "11:20-11:30 break",
        ]
    );
    assert_eq!(s.unscheduled, vec!["budget".to_string(), "inbox".to_string()]);
    // 120 of 180 minutes, urgent first: 60 + 10
    assert_eq!(s.productivity_score, 70);
    assert!(s.recommendations.iter().any(|r| r.starts_with("📌 2 tasks did not fit")));
    assert!(s.recommendations.iter().any(|r| r.contains("Capped 1 task")));
}

#[test]
fn test_urgent_medium_low_scenario() {
    let now = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
    let tasks = vec![
        Task::new("low", "a").with_priority(Priority::Low),
        Task::new("urgent", "b").with_priority(Priority::Urgent),
        Task::new("medium", "c")
            .with_priority(Priority::Medium)
            .with_due(now + Duration::days(1)),
    ];
    assert_eq!(ids(&prioritize(&tasks)), vec!["urgent", "medium", "low"]);
}

#[test]
fn test_two_hour_window_scenario() {
    let prefs = UserPreferences::new("09:00", "11:00", 60, 15);
    let tasks = vec![
        Task::new("t1", "one").with_estimate(60),
        Task::new("t2", "two").with_estimate(60),
    ];
    let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let s = build_schedule(&tasks, &prefs, date).unwrap();

    assert_eq!(s.slots.len(), 2);
    assert_eq!(s.slots[0].task().map(|t| t.id.as_str()), Some("t1"));
    assert!(s.slots[1].is_break());
    assert_eq!(s.slots[1].end_time.to_string(), "10:15");
}

#[test]
fn test_invalid_hours_produce_no_schedule() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    for (start, end) in [("10:00", "10:00"), ("18:00", "09:00"), ("25:00", "26:00")] {
        let prefs = UserPreferences::new(start, end, 50, 10);
        assert!(build_schedule(&store_tasks(), &prefs, date).is_err());
    }
    let prefs = UserPreferences::new("09:00", "17:00", 50, 0);
    assert_eq!(
        build_schedule(&store_tasks(), &prefs, date).unwrap_err(),
        ConfigError::NonPositive { field: "breakTime" }
    );
}

#[test]
fn test_analyze_completed_from_export() {
    let tasks = store_tasks();
    let completed: Vec<Task> = tasks
        .into_iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .collect();
    let a = analyze(&completed);
    assert_eq!(a.score, 9);
    assert_eq!(a.insights[0], "✅ Completed 1 task today");
    assert!(a.insights.contains(&"⏱️ Tasks took 50% longer than estimated".to_string()));
    assert!(a.insights.contains(&"🕒 Most tasks were completed around 09:00 UTC".to_string()));

    let empty = analyze(&[]);
    assert_eq!(empty.score, 0);
    assert_eq!(empty.insights, vec![NO_TASKS_INSIGHT.to_string()]);
}
