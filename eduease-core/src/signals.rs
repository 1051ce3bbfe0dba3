//! Deadline signals — the normalized per-task input to stress scoring.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Per-task stress input: full datetime deadline, grade fraction, and a
/// numeric difficulty level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineSignal {
    pub task_name: String,

    /// ISO-8601 datetime; task due dates widen to midnight UTC.
    pub deadline: DateTime<Utc>,

    /// 0-1 fraction of the grade.
    pub subject_weightage: f64,

    /// 1 (easy), 3 (medium), or 5 (hard).
    pub difficulty_level: i32,
}

impl DeadlineSignal {
    pub fn from_task(task: &Task) -> Self {
        Self {
            task_name: task.name.clone(),
            deadline: task.deadline.and_time(NaiveTime::MIN).and_utc(),
            subject_weightage: task.weightage_fraction(),
            difficulty_level: task.difficulty_level(),
        }
    }
}

pub fn signals_from_tasks(tasks: &[Task]) -> Vec<DeadlineSignal> {
    tasks.iter().map(DeadlineSignal::from_task).collect()
}
