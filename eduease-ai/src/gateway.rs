//! Action gateway — the fail-safe boundary in front of the assist services.
//!
//! Callers always get a well-formed, renderable result. Any failure
//! (invocation, schema, timeout) is logged for operators and replaced with
//! the documented default. One attempt per call, no retries.

use eduease_core::{
    DeadlineSignal, PrioritizationRequest, PrioritizationResult, StressRequest, StressResult, Task,
};
use tracing::warn;

use crate::model::TextModel;
use crate::prioritize::prioritize_tasks;
use crate::stress::score_stress;

/// Reasoning text shown when prioritization fails.
pub const PRIORITIZATION_FALLBACK_REASONING: &str =
    "An error occurred while prioritizing tasks. Please try again later.";

/// Prioritize `tasks`. Never fails: on any service error the caller gets an
/// empty list with an explanatory reasoning string.
pub async fn prioritize(model: &dyn TextModel, tasks: Vec<Task>) -> PrioritizationResult {
    let request = PrioritizationRequest { tasks };
    match prioritize_tasks(model, &request).await {
        Ok(result) => result,
        Err(e) => {
            warn!("task prioritization failed, returning fallback: {}", e);
            PrioritizationResult {
                prioritized_tasks: Vec::new(),
                reasoning: PRIORITIZATION_FALLBACK_REASONING.to_string(),
            }
        }
    }
}

/// Score workload stress for `deadlines` under `batch_load`. Never fails:
/// on any service error the caller gets a zero score with no suggestions.
pub async fn reduce_stress(
    model: &dyn TextModel,
    deadlines: Vec<DeadlineSignal>,
    batch_load: f64,
) -> StressResult {
    let request = StressRequest {
        deadlines,
        batch_load,
    };
    match score_stress(model, &request).await {
        Ok(result) => result,
        Err(e) => {
            warn!("stress scoring failed, returning fallback: {}", e);
            StressResult {
                stress_score: 0.0,
                suggestions: Vec::new(),
            }
        }
    }
}
