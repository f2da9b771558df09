use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use smartplan_core::{analyze, build_schedule, prioritize, today_in, Task};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod state;

#[derive(Parser, Debug)]
#[command(name = "smartplan", version, about = "Task prioritization and daily planning")]
struct Cli {
    /// Log planning decisions to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print tasks in urgency order
    Prioritize {
        /// JSON array of task rows
        #[arg(long)]
        tasks: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Pack open tasks into today's working hours
    Schedule {
        /// JSON array of task rows
        #[arg(long)]
        tasks: PathBuf,

        /// Plan date (default: today in the configured timezone)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Working day start, HH:MM
        #[arg(long)]
        start: Option<String>,

        /// Working day end, HH:MM
        #[arg(long)]
        end: Option<String>,

        /// Focus block length in minutes
        #[arg(long)]
        focus: Option<u32>,

        /// Break length in minutes
        #[arg(long = "break")]
        break_minutes: Option<u32>,

        #[arg(long)]
        json: bool,
    },

    /// Score the completed tasks in a task file
    Analyze {
        /// JSON array of task rows
        #[arg(long)]
        tasks: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Manage ~/.smartplan/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Prioritize { tasks, json } => {
            let tasks = state::read_tasks(&tasks)?;
            let ordered = prioritize(&tasks);
            if json {
                println!("{}", serde_json::to_string_pretty(&ordered)?);
            } else {
                print!("{}", render::ranked(&ordered));
            }
        }

        Command::Schedule {
            tasks,
            date,
            start,
            end,
            focus,
            break_minutes,
            json,
        } => {
            let mut section = config::load_config()?.schedule;
            if let Some(v) = start {
                section.day_start = v;
            }
            if let Some(v) = end {
                section.day_end = v;
            }
            if let Some(v) = focus {
                section.focus_minutes = v;
            }
            if let Some(v) = break_minutes {
                section.break_minutes = v;
            }
            schedule_day(&tasks, date, &section, json)?;
        }

        Command::Analyze { tasks, json } => {
            let tasks = state::read_tasks(&tasks)?;
            let completed: Vec<Task> = tasks.into_iter().filter(Task::is_completed).collect();
            let analysis = analyze(&completed);
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print!("{}", render::analysis(&analysis));
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn schedule_day(
    tasks_path: &Path,
    date: Option<NaiveDate>,
    section: &config::ScheduleSection,
    json: bool,
) -> Result<()> {
    let tasks = state::read_tasks(tasks_path)?;
    let date = match date {
        Some(d) => d,
        None => today_in(&section.timezone, Utc::now())
            .with_context(|| format!("unknown timezone in config: {}", section.timezone))?,
    };

    let prefs = section.preferences();
    let plan = build_schedule(&tasks, &prefs, date).context("invalid schedule preferences")?;
    tracing::info!(
        %date,
        slots = plan.slots.len(),
        score = plan.productivity_score,
        "schedule ready"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render::schedule(&plan));
    }
    Ok(())
}
