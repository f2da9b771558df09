//! Task prioritizer: a stable multi-key sort.
//!
//! Ordering (first key dominates):
//! - priority rank ASC (urgent first)
//! - due date: dated before undated, earlier before later
//! - estimate ASC, unknown estimates last ("quick wins" first)
//!
//! Anything still tied keeps its input order.

use std::cmp::Ordering;

use crate::task::Task;

/// Ranking strategy consumed by the schedule builder.
///
/// [`UrgencyRanker`] is the deterministic default. Other strategies plug in
/// here without touching the packer.
pub trait TaskRanker {
    fn rank(&self, tasks: &[Task]) -> Vec<Task>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UrgencyRanker;

impl TaskRanker for UrgencyRanker {
    fn rank(&self, tasks: &[Task]) -> Vec<Task> {
        prioritize(tasks)
    }
}

/// Return the tasks in urgency order. No task is added, dropped or changed.
pub fn prioritize(tasks: &[Task]) -> Vec<Task> {
    let mut out = tasks.to_vec();
    // sort_by is stable
    out.sort_by(compare_tasks);
    tracing::debug!(count = out.len(), "prioritized tasks");
    out
}

pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    a.priority
        .rank()
        .cmp(&b.priority.rank())
        .then_with(|| some_first(a.due_date, b.due_date))
        .then_with(|| some_first(a.effective_estimate(), b.effective_estimate()))
}

/// Defined values sort before undefined ones; two undefined values tie.
fn some_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
