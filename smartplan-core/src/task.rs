//! Task model shared by the prioritizer, the schedule builder and the analyzer.
//!
//! Tasks are owned by the external store; the core only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Urgent = 0,
    High = 1,
    #[default]
    Medium = 2,
    Low = 3,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// 0 for urgent through 3 for low.
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn is_high_impact(self) -> bool {
        matches!(self, Priority::Urgent | Priority::High)
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// A unit of user-tracked work, as exported by the task store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub priority: Priority,
    pub status: TaskStatus,

    /// Minutes. `None` and `Some(0)` both mean "unknown length".
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
    #[serde(default)]
    pub actual_minutes: Option<u32>,

    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,

    // Carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            priority: Priority::Medium,
            status: TaskStatus::Todo,
            estimated_minutes: None,
            actual_minutes: None,
            due_date: None,
            completed_at: None,
            description: None,
            tags: Vec::new(),
            user_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_due(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_estimate(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }

    pub fn with_actual(mut self, minutes: u32) -> Self {
        self.actual_minutes = Some(minutes);
        self
    }

    /// Mark the task completed at `at`.
    pub fn mark_completed(mut self, at: DateTime<Utc>) -> Self {
        self.status = TaskStatus::Completed;
        self.completed_at = Some(at);
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Positive estimate, or `None` when the length is unknown.
    pub fn effective_estimate(&self) -> Option<u32> {
        self.estimated_minutes.filter(|m| *m > 0)
    }
}
