//! smartplan-core: deterministic task prioritization, daily schedule packing
//! and productivity analysis.
//!
//! Every operation is a pure function over caller-supplied tasks; the crate
//! performs no I/O and holds no state.

pub mod analyzer;
pub mod error;
pub mod preferences;
pub mod prioritizer;
pub mod schedule;
pub mod task;
pub mod time;

pub use analyzer::{analyze, ProductivityAnalysis, NO_TASKS_INSIGHT, START_SMALL_RECOMMENDATION};
pub use error::ConfigError;
pub use preferences::{UserPreferences, WorkWindow, WorkingHours};
pub use prioritizer::{compare_tasks, prioritize, TaskRanker, UrgencyRanker};
pub use schedule::{build_schedule, DailySchedule, ScheduleBuilder, ScheduleSlot, SlotKind};
pub use task::{Priority, Task, TaskStatus};
pub use time::{today_in, WallTime};
