//! Plain-text rendering of core results.

use smartplan_core::{DailySchedule, ProductivityAnalysis, Task};
use std::fmt::Write;

fn due_label(task: &Task) -> String {
    task.due_date
        .map(|d| format!("due {}", d.format("%Y-%m-%d %H:%M")))
        .unwrap_or_else(|| "no due date".to_string())
}

fn estimate_label(task: &Task) -> String {
    task.effective_estimate()
        .map(|m| format!("{m} min"))
        .unwrap_or_else(|| "? min".to_string())
}

pub fn ranked(tasks: &[Task]) -> String {
    let mut out = String::new();
    for (i, t) in tasks.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. [{}] {} | {} | {}",
            i + 1,
            t.priority.label(),
            t.title,
            due_label(t),
            estimate_label(t)
        );
    }
    out
}

pub fn schedule(s: &DailySchedule) -> String {
    let mut out = format!("# Plan for {}\n\n", s.date);
    if s.slots.is_empty() {
        out.push_str("(nothing scheduled)\n");
    }
    for slot in &s.slots {
        match slot.task() {
            Some(t) => {
                let _ = writeln!(
                    out,
                    "{}-{}  [{}] {}",
                    slot.start_time,
                    slot.end_time,
                    t.priority.label(),
                    t.title
                );
            }
            None => {
                let _ = writeln!(out, "{}-{}  break", slot.start_time, slot.end_time);
            }
        }
    }
    if !s.unscheduled.is_empty() {
        let _ = writeln!(out, "\nNot scheduled: {}", s.unscheduled.join(", "));
    }
    let _ = writeln!(
        out,
        "\nWork: {} min | Productivity score: {}/100\n",
        s.work_minutes(),
        s.productivity_score
    );
    for r in &s.recommendations {
        let _ = writeln!(out, "- {r}");
    }
    out
}

pub fn analysis(a: &ProductivityAnalysis) -> String {
    let mut out = format!("Productivity score: {}/100\n\n## Insights\n", a.score);
    for i in &a.insights {
        let _ = writeln!(out, "- {i}");
    }
    out.push_str("\n## Recommendations\n");
    for r in &a.recommendations {
        let _ = writeln!(out, "- {r}");
    }
    out
}
