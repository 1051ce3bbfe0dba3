//! Stress scoring service.
//!
//! Renders deadline signals plus the batch-load scalar into a fixed
//! template and asks the model for a 0-100 score with optional deadline
//! adjustments. The score is clamped on receipt; the suggestion list may
//! legitimately be empty.

use chrono::SecondsFormat;
use eduease_core::{clamp_score, StressRequest, StressResult};

use crate::error::AssistError;
use crate::model::TextModel;
use crate::parse::decode_payload;

pub(crate) const SYSTEM_PROMPT: &str =
    "You are an AI assistant that helps students balance their workload before deadlines pile up.";

/// One line per deadline signal, fixed field order, plus the batch load.
pub fn render_prompt(request: &StressRequest) -> String {
    let mut prompt = String::from(
        "Assess how stressful the following workload is and suggest deadline changes only \
         where they would genuinely relieve pressure.\n\nDeadlines:\n",
    );

    for signal in &request.deadlines {
        prompt.push_str(&format!(
            "- Task: {}, Deadline: {}, Subject weightage: {}, Difficulty level: {}\n",
            signal.task_name,
            signal.deadline.to_rfc3339_opts(SecondsFormat::Secs, true),
            signal.subject_weightage,
            signal.difficulty_level
        ));
    }

    prompt.push_str(&format!("\nCurrent batch load: {}\n", request.batch_load));

    prompt.push_str(
        "\nCompute an overall stress score between 0 and 100. Respond with a single JSON \
         object and nothing else, in exactly this shape:\n\
         {\"stressScore\": <number>, \"suggestions\": [{\"taskName\": \"<task>\", \
         \"newDeadline\": \"<ISO-8601 datetime>\", \"reason\": \"<why>\"}]}\n\
         Use an empty suggestions array when the workload is already balanced. \
         Do not add extra keys, markdown fences, or prose around the JSON.",
    );
    prompt
}

pub async fn score_stress(
    model: &dyn TextModel,
    request: &StressRequest,
) -> Result<StressResult, AssistError> {
    let output = model
        .complete(SYSTEM_PROMPT, &render_prompt(request))
        .await?;

    let mut result: StressResult = decode_payload(&output)?;

    if !result.stress_score.is_finite() {
        return Err(AssistError::Schema(format!(
            "stressScore is not a finite number: {}",
            result.stress_score
        )));
    }
    result.stress_score = clamp_score(result.stress_score);

    Ok(result)
}
