//! Productivity analyzer: score, insights and recommendations for completed work.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::task::{Priority, Task};

pub const NO_TASKS_INSIGHT: &str = "📊 No tasks have been completed today yet";
pub const START_SMALL_RECOMMENDATION: &str = "🌱 Start with a small, easy task to build momentum";

/// Actual/estimated ratios inside this band count as accurate.
const ACCURATE_BAND: (f64, f64) = (0.9, 1.1);
const PAD_ESTIMATES_ABOVE: f64 = 1.2;
const TIGHTEN_ESTIMATES_BELOW: f64 = 0.8;
const MOMENTUM_COUNT: usize = 5;
/// Points at which the score reaches 50; the curve approaches 100 without reaching it.
const HALF_SCORE_POINTS: u32 = 100;

const HIGH_IMPACT_NEXT: &str =
    "🎯 Tackle an urgent or high-priority task next for the biggest impact";
const PAD_ESTIMATES: &str = "📏 Pad your estimates: tasks are running longer than planned";
const TIGHTEN_ESTIMATES: &str = "🚀 You finish faster than planned; try tightening your estimates";
const TAKE_BREAKS: &str = "☕ Great momentum; remember to take regular breaks";
const KEEP_GOING: &str = "💪 Keep going: pick the next quick win from your list";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityAnalysis {
    /// 0-100
    pub score: u8,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Points a completed task contributes to the score.
fn weight(priority: Priority) -> u32 {
    match priority {
        Priority::Urgent => 20,
        Priority::High => 15,
        Priority::Medium => 10,
        Priority::Low => 5,
    }
}

/// Analyze a list of completed tasks.
pub fn analyze(completed: &[Task]) -> ProductivityAnalysis {
    if completed.is_empty() {
        return ProductivityAnalysis {
            score: 0,
            insights: vec![NO_TASKS_INSIGHT.to_string()],
            recommendations: vec![START_SMALL_RECOMMENDATION.to_string()],
        };
    }

    let n = completed.len();
    let high_impact = completed
        .iter()
        .filter(|t| t.priority.is_high_impact())
        .count();
    let score = productivity_score(completed);
    let ratio = estimate_ratio(completed);

    let mut insights = vec![format!("✅ Completed {n} {} today", tasks_word(n))];
    if high_impact > 0 {
        insights.push(format!("🔥 {high_impact} of them were urgent or high priority"));
    }
    insights.push(format!(
        "🏷️ Most completed work was {} priority",
        dominant_priority(completed).label()
    ));
    if let Some(r) = ratio {
        insights.push(describe_ratio(r));
    }
    if let Some(hour) = peak_hour(completed) {
        insights.push(format!("🕒 Most tasks were completed around {hour:02}:00 UTC"));
    }

    let mut recommendations = Vec::new();
    if high_impact == 0 {
        recommendations.push(HIGH_IMPACT_NEXT.to_string());
    }
    match ratio {
        Some(r) if r > PAD_ESTIMATES_ABOVE => recommendations.push(PAD_ESTIMATES.to_string()),
        Some(r) if r < TIGHTEN_ESTIMATES_BELOW => {
            recommendations.push(TIGHTEN_ESTIMATES.to_string())
        }
        _ => {}
    }
    if n >= MOMENTUM_COUNT {
        recommendations.push(TAKE_BREAKS.to_string());
    } else {
        recommendations.push(KEEP_GOING.to_string());
    }

    tracing::debug!(completed = n, high_impact, score, "analyzed productivity");

    ProductivityAnalysis {
        score,
        insights,
        recommendations,
    }
}

/// `100 * points / (points + HALF_SCORE_POINTS)`, floored.
///
/// Every extra task still moves the score, so an urgent completion outranks a
/// low one even on a busy day.
fn productivity_score(completed: &[Task]) -> u8 {
    let points: u64 = completed.iter().map(|t| u64::from(weight(t.priority))).sum();
    (100 * points / (points + u64::from(HALF_SCORE_POINTS))) as u8
}

fn tasks_word(n: usize) -> &'static str {
    if n == 1 { "task" } else { "tasks" }
}

/// Most frequent priority; ties go to the more urgent one.
fn dominant_priority(completed: &[Task]) -> Priority {
    let mut best = (Priority::Urgent, 0usize);
    for p in Priority::ALL {
        let count = completed.iter().filter(|t| t.priority == p).count();
        if count > best.1 {
            best = (p, count);
        }
    }
    best.0
}

/// Total actual over total estimated minutes, for tasks that have both.
fn estimate_ratio(completed: &[Task]) -> Option<f64> {
    let (actual, estimated) = completed
        .iter()
        .filter_map(|t| match (t.actual_minutes, t.effective_estimate()) {
            (Some(a), Some(e)) if a > 0 => Some((u64::from(a), u64::from(e))),
            _ => None,
        })
        .fold((0u64, 0u64), |(sa, se), (a, e)| (sa + a, se + e));

    (estimated > 0).then(|| actual as f64 / estimated as f64)
}

fn describe_ratio(r: f64) -> String {
    let (lo, hi) = ACCURATE_BAND;
    if r > hi {
        format!("⏱️ Tasks took {}% longer than estimated", ((r - 1.0) * 100.0).round())
    } else if r < lo {
        format!("⚡ Tasks took {}% less time than estimated", ((1.0 - r) * 100.0).round())
    } else {
        "🎯 Your estimates were on target".to_string()
    }
}

/// Most common UTC hour of completion; the earliest hour wins ties.
fn peak_hour(completed: &[Task]) -> Option<u32> {
    let mut hours = [0usize; 24];
    for at in completed.iter().filter_map(|t| t.completed_at) {
        hours[at.hour() as usize] += 1;
    }

    let mut best: Option<(u32, usize)> = None;
    for (h, &count) in hours.iter().enumerate() {
        if count > 0 && best.is_none_or(|(_, c)| count > c) {
            best = Some((h as u32, count));
        }
    }
    best.map(|(h, _)| h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn done(id: &str, priority: Priority, hour: u32) -> Task {
        Task::new(id, id)
            .with_priority(priority)
            .mark_completed(Utc.with_ymd_and_hms(2026, 3, 2, hour, 15, 0).unwrap())
    }

    #[test]
    fn empty_input_is_fixed() {
        let a = analyze(&[]);
        assert_eq!(a.score, 0);
        assert_eq!(a.insights, vec![NO_TASKS_INSIGHT.to_string()]);
        assert_eq!(a.recommendations, vec![START_SMALL_RECOMMENDATION.to_string()]);
    }

    #[test]
    fn score_weights_priority() {
        assert_eq!(analyze(&[done("a", Priority::Low, 9)]).score, 4);
        assert_eq!(analyze(&[done("a", Priority::Urgent, 9)]).score, 16);
        let mixed = [done("a", Priority::High, 9), done("b", Priority::Medium, 10)];
        assert_eq!(analyze(&mixed).score, 20);
    }

    fn urgent_run(n: usize) -> Vec<Task> {
        (0..n)
            .map(|i| done(&format!("t{i}"), Priority::Urgent, 9))
            .collect()
    }

    #[test]
    fn score_keeps_rising_below_100() {
        assert_eq!(analyze(&urgent_run(5)).score, 50);
        assert_eq!(analyze(&urgent_run(8)).score, 61);
        assert_eq!(analyze(&urgent_run(9)).score, 64);
        assert!(analyze(&urgent_run(200)).score < 100);
    }

    #[test]
    fn urgent_addition_beats_low_addition_on_a_busy_day() {
        let mut with_urgent = urgent_run(5);
        with_urgent.push(done("u", Priority::Urgent, 10));
        let mut with_low = urgent_run(5);
        with_low.push(done("l", Priority::Low, 10));

        assert_eq!(analyze(&with_urgent).score, 54);
        assert_eq!(analyze(&with_low).score, 51);
    }

    #[test]
    fn urgent_addition_beats_low_addition() {
        let base = vec![done("a", Priority::Medium, 9)];
        let mut with_urgent = base.clone();
        with_urgent.push(done("u", Priority::Urgent, 10));
        let mut with_low = base.clone();
        with_low.push(done("l", Priority::Low, 10));

        let s0 = analyze(&base).score;
        let su = analyze(&with_urgent).score;
        let sl = analyze(&with_low).score;
        assert!(su > sl && sl > s0);
    }

    #[test]
    fn insights_cover_counts_priority_and_peak_hour() {
        let tasks = [
            done("a", Priority::High, 9),
            done("b", Priority::Low, 14),
            done("c", Priority::Low, 14),
        ];
        let a = analyze(&tasks);
        assert_eq!(a.insights[0], "✅ Completed 3 tasks today");
        assert_eq!(a.insights[1], "🔥 1 of them were urgent or high priority");
        assert_eq!(a.insights[2], "🏷️ Most completed work was low priority");
        assert_eq!(a.insights[3], "🕒 Most tasks were completed around 14:00 UTC");
        assert_eq!(a.recommendations, vec![KEEP_GOING.to_string()]);
    }

    #[test]
    fn overruns_suggest_padding() {
        let tasks = [
            done("a", Priority::Medium, 9).with_estimate(30).with_actual(45),
            done("b", Priority::Medium, 10).with_estimate(30).with_actual(45),
        ];
        let a = analyze(&tasks);
        assert!(a.insights.contains(&"⏱️ Tasks took 50% longer than estimated".to_string()));
        assert_eq!(
            a.recommendations,
            vec![
                HIGH_IMPACT_NEXT.to_string(),
                PAD_ESTIMATES.to_string(),
                KEEP_GOING.to_string(),
            ]
        );
    }

    #[test]
    fn fast_finishes_suggest_tightening() {
        let tasks = [done("a", Priority::Urgent, 9).with_estimate(60).with_actual(30)];
        let a = analyze(&tasks);
        assert!(a.insights.contains(&"⚡ Tasks took 50% less time than estimated".to_string()));
        assert!(a.recommendations[0].starts_with("🚀"));
    }

    #[test]
    fn accurate_estimates_are_called_out() {
        let tasks = [done("a", Priority::High, 9).with_estimate(60).with_actual(62)];
        let a = analyze(&tasks);
        assert!(a.insights.contains(&"🎯 Your estimates were on target".to_string()));
    }

    #[test]
    fn tasks_without_timestamps_skip_peak_hour() {
        let t = Task::new("x", "x").with_priority(Priority::Medium);
        let a = analyze(&[t]);
        assert!(!a.insights.iter().any(|i| i.contains("UTC")));
        assert!(!a.recommendations.is_empty());
    }
}
