//! Deterministic local fallback for when no model is configured.
//!
//! Orders by earliest deadline, then heavier weightage, then harder
//! difficulty. Nowhere near the model's judgement, but it keeps the tool
//! usable without a key.

use std::cmp::Ordering;

use eduease_core::{
    clamp_score, estimate_batch_load, PrioritizationResult, StressResult, Task,
};

pub fn prioritize_offline(tasks: &[Task]) -> PrioritizationResult {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| {
        a.deadline
            .cmp(&b.deadline)
            .then_with(|| {
                b.weightage
                    .partial_cmp(&a.weightage)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| b.difficulty_level().cmp(&a.difficulty_level()))
    });

    PrioritizationResult {
        prioritized_tasks: ordered.iter().map(|t| t.name.clone()).collect(),
        reasoning: "Offline ordering: earliest deadline first, then higher weightage, then \
                    higher difficulty."
            .to_string(),
    }
}

pub fn stress_offline(tasks: &[Task], batch_load: f64) -> StressResult {
    // Blend the local density estimate with the caller-supplied batch load.
    let score = (estimate_batch_load(tasks) + batch_load) / 2.0;
    StressResult {
        stress_score: clamp_score(score),
        suggestions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_offline_order_is_deadline_first() {
        let tasks = vec![
            Task::new("later", date(2026, 9, 20), "s").with_weightage(90.0),
            Task::new("sooner", date(2026, 9, 10), "s").with_weightage(5.0),
        ];
        let result = prioritize_offline(&tasks);
        assert_eq!(result.prioritized_tasks, vec!["sooner", "later"]);
    }

    #[test]
    fn test_offline_order_breaks_ties_by_weightage() {
        let tasks = vec![
            Task::new("light", date(2026, 9, 10), "s").with_weightage(10.0),
            Task::new("heavy", date(2026, 9, 10), "s").with_weightage(30.0),
        ];
        let result = prioritize_offline(&tasks);
        assert_eq!(result.prioritized_tasks, vec!["heavy", "light"]);
    }

    #[test]
    fn test_offline_stress_stays_in_range() {
        let tasks = vec![Task::new("t", date(2026, 9, 10), "s").with_weightage(20.0)];
        let result = stress_offline(&tasks, 70.0);
        assert!(result.stress_score >= 0.0 && result.stress_score <= 100.0);
        assert!(result.suggestions.is_empty());
    }
}
