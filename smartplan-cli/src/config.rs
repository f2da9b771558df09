use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use smartplan_core::UserPreferences;
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_smartplan_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSection {
    /// "HH:MM"
    pub day_start: String,
    /// "HH:MM"
    pub day_end: String,
    pub focus_minutes: u32,
    pub break_minutes: u32,
    /// IANA zone used to decide which date "today" is.
    pub timezone: String,
}

impl Default for ScheduleSection {
    fn default() -> Self {
        let prefs = UserPreferences::default();
        Self {
            day_start: prefs.working_hours.start,
            day_end: prefs.working_hours.end,
            focus_minutes: prefs.focus_time,
            break_minutes: prefs.break_time,
            timezone: "UTC".to_string(),
        }
    }
}

impl ScheduleSection {
    pub fn preferences(&self) -> UserPreferences {
        UserPreferences::new(
            self.day_start.clone(),
            self.day_end.clone(),
            self.focus_minutes,
            self.break_minutes,
        )
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_smartplan_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        tracing::debug!(path = %p.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
