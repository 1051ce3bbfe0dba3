//! eduease-core: Core types and contracts for the EduEase assist services

pub mod contract;
pub mod signals;
pub mod task;

pub use contract::{
    clamp_score, reconcile_order, PrioritizationRequest, PrioritizationResult, StressRequest,
    StressResult, Suggestion,
};
pub use signals::{signals_from_tasks, DeadlineSignal};
pub use task::Task;

/// Utility for estimating how loaded a batch of tasks is
pub mod workload {
    use super::Task;

    /// Batch load used when there is no task list to estimate from.
    pub const DEFAULT_BATCH_LOAD: f64 = 70.0;

    /// Deterministic 0-100 workload density over a task list.
    ///
    /// Blends task count, average grading weight, and average difficulty.
    /// This stands in for the batch-analytics signal the stress request
    /// carries alongside the per-task deadlines.
    pub fn estimate_batch_load(tasks: &[Task]) -> f64 {
        if tasks.is_empty() {
            return 0.0;
        }

        let count = tasks.len() as f64;
        let avg_weightage = tasks.iter().map(|t| t.weightage).sum::<f64>() / count;
        let avg_difficulty = tasks
            .iter()
            .map(|t| t.difficulty_level() as f64)
            .sum::<f64>()
            / count;

        let load = count * 8.0 + avg_weightage * 0.5 + avg_difficulty * 6.0;
        load.clamp(0.0, 100.0)
    }

}

pub use workload::estimate_batch_load;
