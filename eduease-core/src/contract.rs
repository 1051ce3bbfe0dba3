//! Request/response contract for the assist services.
//!
//! The result shapes are exactly what the model is instructed to emit.
//! Unknown keys are rejected on deserialize so a payload with extra
//! structure fails validation instead of leaking through to callers.

use serde::{Deserialize, Serialize};

use crate::signals::DeadlineSignal;
use crate::task::Task;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PrioritizationRequest {
    pub tasks: Vec<Task>,
}

/// Ordered task names plus the model's justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PrioritizationResult {
    pub prioritized_tasks: Vec<String>,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressRequest {
    pub deadlines: Vec<DeadlineSignal>,
    pub batch_load: f64,
}

/// 0-100 workload pressure plus zero or more deadline adjustments.
///
/// Empty `suggestions` means "no deadline changes recommended", a normal
/// business state rather than a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StressResult {
    pub stress_score: f64,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Suggestion {
    pub task_name: String,
    /// ISO-8601 datetime as returned by the model, kept verbatim.
    pub new_deadline: String,
    pub reason: String,
}

/// Force a model-proposed ordering into a permutation of the input names.
///
/// Names the model invented or repeated are dropped; names it left out are
/// appended in input order. Matching is exact: `name` is the identity key.
pub fn reconcile_order(input_names: &[String], model_order: &[String]) -> Vec<String> {
    let mut remaining: Vec<&String> = input_names.iter().collect();
    let mut ordered = Vec::with_capacity(input_names.len());

    for name in model_order {
        if let Some(pos) = remaining.iter().position(|n| *n == name) {
            ordered.push(remaining.remove(pos).clone());
        }
    }
    for left_over in remaining {
        ordered.push(left_over.clone());
    }
    ordered
}

/// Clamp a model-reported stress score into the documented 0-100 range.
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}
