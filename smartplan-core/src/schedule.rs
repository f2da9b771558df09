//! Daily schedule builder: greedy packing of ranked tasks into the working window.
//!
//! v0 behavior:
//! - drop completed tasks
//! - rank the rest (urgency order by default)
//! - walk a cursor from `workingHours.start`, emitting one work block per task
//!   followed by a break, until the window or the task list runs out
//! - score how much of the window holds work and attach advisory text
//!
//! A task never gets more than one block: estimates above `focusTime` are
//! capped to a single focus-length slot. The cap is reported through the
//! recommendations instead of being hidden.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::preferences::{UserPreferences, WorkWindow};
use crate::prioritizer::{TaskRanker, UrgencyRanker};
use crate::task::Task;
use crate::time::WallTime;

/// Added to the score when the day opens with urgent or high-priority work.
const FRONT_LOAD_BONUS: u32 = 10;
/// Share of the score that comes from window fill.
const FILL_WEIGHT: f64 = 90.0;
const PACKED_FILL: f64 = 0.85;
const IDLE_FILL: f64 = 0.5;
/// This many sub-half-focus blocks counts as a fragmented day.
const FRAGMENTED_SLOTS: usize = 3;

const NOTHING_TO_SCHEDULE: &str =
    "🎉 Nothing left to schedule today: every task is done or the list is empty.";
const FULLY_PACKED: &str = "📅 Your day is fully packed; protect your breaks to stay fresh.";
const FRAGMENTED: &str =
    "🧩 Many short tasks fragment the day; batch them into a single focus block.";
const BALANCED: &str = "✅ Balanced plan: work blocks and breaks alternate through the day.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SlotKind {
    Work { task: Task },
    Break,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub start_time: WallTime,
    pub end_time: WallTime,
    #[serde(flatten)]
    pub kind: SlotKind,
}

impl ScheduleSlot {
    fn work(start_time: WallTime, end_time: WallTime, task: Task) -> Self {
        Self {
            start_time,
            end_time,
            kind: SlotKind::Work { task },
        }
    }

    fn rest(start_time: WallTime, end_time: WallTime) -> Self {
        Self {
            start_time,
            end_time,
            kind: SlotKind::Break,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self.kind, SlotKind::Break)
    }

    pub fn task(&self) -> Option<&Task> {
        match &self.kind {
            SlotKind::Work { task } => Some(task),
            SlotKind::Break => None,
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        self.start_time.minutes_until(self.end_time)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySchedule {
    pub date: NaiveDate,
    pub slots: Vec<ScheduleSlot>,
    /// 0-100
    pub productivity_score: u8,
    pub recommendations: Vec<String>,
    /// Ids of actionable tasks that did not fit, in ranked order.
    pub unscheduled: Vec<String>,
}

impl DailySchedule {
    pub fn work_minutes(&self) -> u32 {
        work_minutes(&self.slots)
    }
}

/// Schedule builder over an injected ranking strategy.
#[derive(Debug, Clone)]
pub struct ScheduleBuilder<R: TaskRanker = UrgencyRanker> {
    ranker: R,
}

impl Default for ScheduleBuilder<UrgencyRanker> {
    fn default() -> Self {
        Self::new(UrgencyRanker)
    }
}

impl<R: TaskRanker> ScheduleBuilder<R> {
    pub fn new(ranker: R) -> Self {
        Self { ranker }
    }

    /// Build the plan for `date`.
    ///
    /// Preferences are validated before anything else; an invalid window
    /// aborts the whole build.
    pub fn build(
        &self,
        tasks: &[Task],
        preferences: &UserPreferences,
        date: NaiveDate,
    ) -> Result<DailySchedule> {
        let window = preferences.validate()?;

        let actionable: Vec<Task> = tasks
            .iter()
            .filter(|t| !t.is_completed())
            .cloned()
            .collect();
        let ranked = self.ranker.rank(&actionable);

        let packing = pack(&ranked, &window);
        let productivity_score = productivity_score(&packing.slots, &window);
        let recommendations = recommend(&ranked, &packing, &window);

        tracing::debug!(
            %date,
            actionable = ranked.len(),
            slots = packing.slots.len(),
            unscheduled = packing.unscheduled.len(),
            productivity_score,
            "built daily schedule"
        );

        Ok(DailySchedule {
            date,
            slots: packing.slots,
            productivity_score,
            recommendations,
            unscheduled: packing.unscheduled,
        })
    }
}

/// Build a schedule with the default urgency ranking.
pub fn build_schedule(
    tasks: &[Task],
    preferences: &UserPreferences,
    date: NaiveDate,
) -> Result<DailySchedule> {
    ScheduleBuilder::default().build(tasks, preferences, date)
}

#[derive(Debug)]
struct Packing {
    slots: Vec<ScheduleSlot>,
    unscheduled: Vec<String>,
}

fn block_minutes(task: &Task, focus_time: u32) -> u32 {
    task.effective_estimate().unwrap_or(focus_time).min(focus_time)
}

fn pack(ranked: &[Task], window: &WorkWindow) -> Packing {
    let mut slots = Vec::new();
    let mut cursor = window.start;
    let mut placed = 0;

    for task in ranked {
        if cursor >= window.end {
            break;
        }

        let block = block_minutes(task, window.focus_time);
        // No partial slots: the first task that does not fit ends the day.
        if cursor.minutes_until(window.end) < block {
            break;
        }
        let Some(work_end) = cursor.checked_add(block) else {
            break;
        };
        slots.push(ScheduleSlot::work(cursor, work_end, task.clone()));
        cursor = work_end;
        placed += 1;

        if cursor.minutes_until(window.end) >= window.break_time {
            if let Some(break_end) = cursor.checked_add(window.break_time) {
                slots.push(ScheduleSlot::rest(cursor, break_end));
                cursor = break_end;
            }
        }
    }

    Packing {
        slots,
        unscheduled: ranked[placed..].iter().map(|t| t.id.clone()).collect(),
    }
}

fn work_minutes(slots: &[ScheduleSlot]) -> u32 {
    slots
        .iter()
        .filter(|s| !s.is_break())
        .map(ScheduleSlot::duration_minutes)
        .sum()
}

fn fill_ratio(slots: &[ScheduleSlot], window: &WorkWindow) -> f64 {
    f64::from(work_minutes(slots)) / f64::from(window.len_minutes())
}

fn productivity_score(slots: &[ScheduleSlot], window: &WorkWindow) -> u8 {
    if work_minutes(slots) == 0 {
        return 0;
    }
    let fill = (fill_ratio(slots, window) * FILL_WEIGHT).round() as u32;
    let bonus = match slots.iter().find_map(ScheduleSlot::task) {
        Some(first) if first.priority.is_high_impact() => FRONT_LOAD_BONUS,
        _ => 0,
    };
    (fill + bonus).min(100) as u8
}

fn tasks_word(n: usize) -> &'static str {
    if n == 1 { "task" } else { "tasks" }
}

fn recommend(ranked: &[Task], packing: &Packing, window: &WorkWindow) -> Vec<String> {
    if ranked.is_empty() {
        return vec![NOTHING_TO_SCHEDULE.to_string()];
    }

    let mut out: Vec<String> = Vec::new();
    let fill = fill_ratio(&packing.slots, window);

    if fill >= PACKED_FILL {
        out.push(FULLY_PACKED.to_string());
    }

    if fill < IDLE_FILL && packing.unscheduled.is_empty() {
        let used: u32 = packing
            .slots
            .iter()
            .map(ScheduleSlot::duration_minutes)
            .sum();
        let idle = window.len_minutes().saturating_sub(used);
        out.push(format!(
            "⏳ You have about {idle} minutes of idle capacity; consider pulling in more tasks."
        ));
    }

    if !packing.unscheduled.is_empty() {
        let n = packing.unscheduled.len();
        out.push(format!(
            "📌 {n} {} did not fit today; move them to tomorrow or trim their scope.",
            tasks_word(n)
        ));
    }

    let short = packing
        .slots
        .iter()
        .filter(|s| !s.is_break() && s.duration_minutes() * 2 < window.focus_time)
        .count();
    if short >= FRAGMENTED_SLOTS {
        out.push(FRAGMENTED.to_string());
    }

    let capped = packing
        .slots
        .iter()
        .filter_map(ScheduleSlot::task)
        .filter(|t| t.effective_estimate().is_some_and(|m| m > window.focus_time))
        .count();
    if capped > 0 {
        out.push(format!(
            "✂️ Capped {capped} {} to one {}-minute focus block; the rest is not scheduled today.",
            tasks_word(capped),
            window.focus_time
        ));
    }

    if out.is_empty() {
        out.push(BALANCED.to_string());
    }

    out
}
