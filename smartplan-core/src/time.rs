//! Time utilities: wall-clock "HH:MM" values and timezone-aware calendar dates.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

fn hhmm_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("static regex"))
}

/// A time of day with minute resolution, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallTime(u32);

impl WallTime {
    /// Parse a strict two-digit "HH:MM" string (00:00 through 23:59).
    pub fn parse(s: &str) -> Option<Self> {
        let caps = hhmm_re().captures(s)?;
        let h: u32 = caps[1].parse().ok()?;
        let m: u32 = caps[2].parse().ok()?;
        Some(Self(h * 60 + m))
    }

    /// Build from minutes since midnight. Values past the end of the day are rejected.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    pub fn minute(self) -> u32 {
        self.0 % 60
    }

    /// Minutes from `self` until `later`; zero if `later` is not after `self`.
    pub fn minutes_until(self, later: WallTime) -> u32 {
        later.0.saturating_sub(self.0)
    }

    /// Advance by `minutes`, or `None` when that would leave the day.
    pub fn checked_add(self, minutes: u32) -> Option<Self> {
        self.0.checked_add(minutes).and_then(Self::from_minutes)
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for WallTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WallTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        WallTime::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid HH:MM time: {s:?}")))
    }
}

/// Calendar date of `now` in the IANA time zone `tz`, or `None` for an unknown zone.
pub fn today_in(tz: &str, now: DateTime<Utc>) -> Option<NaiveDate> {
    let tz: Tz = tz.parse().ok()?;
    Some(now.with_timezone(&tz).date_naive())
}
