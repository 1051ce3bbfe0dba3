//! Task list loading (TOML) and the built-in sample set.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use eduease_core::Task;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TaskFile {
    tasks: Vec<Task>,
}

/// Load tasks from a `[[tasks]]` TOML file, or fall back to the sample set.
pub fn load_tasks(path: Option<&Path>) -> Result<Vec<Task>> {
    match path {
        Some(p) => {
            let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
            let file: TaskFile =
                toml::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
            Ok(file.tasks)
        }
        None => Ok(sample_tasks()),
    }
}

/// The demo workload shown before a student wires up their own task file.
pub fn sample_tasks() -> Vec<Task> {
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    vec![
        Task::new("Lab Report 1", date(2026, 9, 15), "Applied Physics")
            .with_weightage(20.0)
            .with_difficulty("Hard"),
        Task::new("Vector Calculus Assignment", date(2026, 9, 10), "Applied Mathematics")
            .with_weightage(15.0)
            .with_difficulty("Medium"),
        Task::new("Essay on Thermodynamics", date(2026, 9, 20), "Applied Chemistry")
            .with_weightage(25.0)
            .with_difficulty("Medium"),
        Task::new("Circuit Analysis Problems", date(2026, 9, 12), "Electrical science")
            .with_weightage(10.0)
            .with_difficulty("Easy"),
        Task::new("Workshop Practice", date(2026, 9, 25), "Manufacturing Process")
            .with_weightage(15.0)
            .with_difficulty("Easy"),
        Task::new("Lab Report 2", date(2026, 9, 30), "Applied Physics")
            .with_weightage(30.0)
            .with_difficulty("Hard"),
    ]
}
