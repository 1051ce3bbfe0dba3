//! Task model for the EduEase assist core.
//!
//! Mirrors the task shape students manage on the dashboard: a display name,
//! a calendar deadline, and the grading signals the assist prompts consume.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A unit of academic work.
///
/// `name` is the identity key when correlating prioritized output back to
/// task detail, so it should be unique within a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,

    /// Due date (calendar date, no time-of-day component).
    pub deadline: NaiveDate,

    pub subject: String,

    /// Grading weight as a percentage, 0-100.
    pub weightage: f64,

    /// Qualitative level: "Easy", "Medium", or "Hard" by convention.
    /// Not enforced; unknown labels are treated as easy when mapped.
    pub difficulty: String,
}

impl Task {
    pub fn new(name: impl Into<String>, deadline: NaiveDate, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deadline,
            subject: subject.into(),
            weightage: 0.0,
            difficulty: "Medium".to_string(),
        }
    }

    pub fn with_weightage(mut self, weightage: f64) -> Self {
        self.weightage = weightage;
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// Numeric difficulty used by stress signals: Hard=5, Medium=3, else 1.
    pub fn difficulty_level(&self) -> i32 {
        if self.difficulty.eq_ignore_ascii_case("hard") {
            5
        } else if self.difficulty.eq_ignore_ascii_case("medium") {
            3
        } else {
            1
        }
    }

    /// Weightage as a 0-1 fraction of the grade.
    pub fn weightage_fraction(&self) -> f64 {
        self.weightage / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let t = Task::new("Lab Report 1", date(2026, 9, 15), "Applied Physics");
        assert_eq!(t.weightage, 0.0);
        assert_eq!(t.difficulty, "Medium");
    }

    #[test]
    fn test_difficulty_level_mapping() {
        let t = Task::new("x", date(2026, 9, 1), "s");
        assert_eq!(t.clone().with_difficulty("Hard").difficulty_level(), 5);
        assert_eq!(t.clone().with_difficulty("Medium").difficulty_level(), 3);
        assert_eq!(t.clone().with_difficulty("Easy").difficulty_level(), 1);
        // Unknown labels fall through to the lowest level.
        assert_eq!(t.with_difficulty("Brutal").difficulty_level(), 1);
    }

    #[test]
    fn test_difficulty_level_is_case_insensitive() {
        let t = Task::new("x", date(2026, 9, 1), "s").with_difficulty("hard");
        assert_eq!(t.difficulty_level(), 5);
    }

    #[test]
    fn test_weightage_fraction() {
        let t = Task::new("x", date(2026, 9, 1), "s").with_weightage(20.0);
        assert!((t.weightage_fraction() - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deadline_deserializes_from_iso_date() {
        let t: Task = serde_json::from_str(
            r#"{"name":"Essay","deadline":"2026-09-20","subject":"Applied Chemistry","weightage":25,"difficulty":"Medium"}"#,
        )
        .unwrap();
        assert_eq!(t.deadline, date(2026, 9, 20));
        assert_eq!(t.weightage, 25.0);
    }
}
