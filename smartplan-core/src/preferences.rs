//! User scheduling preferences and their validation.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::time::WallTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// "HH:MM"
    pub start: String,
    /// "HH:MM"
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub working_hours: WorkingHours,
    /// Longest uninterrupted work block, minutes.
    pub focus_time: u32,
    /// Break inserted after each work block, minutes.
    pub break_time: u32,
}

/// Preferences after validation, with the window parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWindow {
    pub start: WallTime,
    pub end: WallTime,
    pub focus_time: u32,
    pub break_time: u32,
}

impl WorkWindow {
    pub fn len_minutes(&self) -> u32 {
        self.start.minutes_until(self.end)
    }
}

impl UserPreferences {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        focus_time: u32,
        break_time: u32,
    ) -> Self {
        Self {
            working_hours: WorkingHours {
                start: start.into(),
                end: end.into(),
            },
            focus_time,
            break_time,
        }
    }

    /// Check every field and parse the working window.
    pub fn validate(&self) -> Result<WorkWindow> {
        let start = parse_field("workingHours.start", &self.working_hours.start)?;
        let end = parse_field("workingHours.end", &self.working_hours.end)?;
        if end <= start {
            return Err(ConfigError::EmptyWindow {
                start: self.working_hours.start.clone(),
                end: self.working_hours.end.clone(),
            });
        }
        if self.focus_time == 0 {
            return Err(ConfigError::NonPositive { field: "focusTime" });
        }
        if self.break_time == 0 {
            return Err(ConfigError::NonPositive { field: "breakTime" });
        }

        Ok(WorkWindow {
            start,
            end,
            focus_time: self.focus_time,
            break_time: self.break_time,
        })
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self::new("09:00", "18:00", 50, 10)
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<WallTime> {
    WallTime::parse(value).ok_or_else(|| ConfigError::InvalidTime {
        field,
        value: value.to_string(),
    })
}
