//! Task prioritization service.
//!
//! Renders the task list into a fixed instruction template, asks the model
//! for an ordered list of names plus a justification, then validates and
//! reconciles the answer. Failures propagate; the gateway decides what the
//! caller sees.

use eduease_core::{reconcile_order, PrioritizationRequest, PrioritizationResult, Task};

use crate::error::AssistError;
use crate::model::TextModel;
use crate::parse::decode_payload;

pub(crate) const SYSTEM_PROMPT: &str =
    "You are an AI assistant designed to help students prioritize their tasks.";

/// One line per task, fixed field order. Deterministic: same tasks in, same
/// prompt out.
pub fn render_prompt(tasks: &[Task]) -> String {
    let mut prompt = String::from(
        "Given the following tasks with their deadlines, subject weightage, and difficulty \
         level, provide a prioritized list of tasks and explain your reasoning.\n\nTasks:\n",
    );

    for task in tasks {
        prompt.push_str(&format!(
            "- Name: {}, Deadline: {}, Subject: {}, Weightage: {}%, Difficulty: {}\n",
            task.name,
            task.deadline.format("%Y-%m-%d"),
            task.subject,
            task.weightage,
            task.difficulty
        ));
    }

    prompt.push_str(
        "\nRespond with a single JSON object and nothing else, in exactly this shape:\n\
         {\"prioritizedTasks\": [\"<task name, highest priority first>\", ...], \
         \"reasoning\": \"<why this order, considering deadlines, weightage, and difficulty>\"}\n\
         Do not add extra keys, markdown fences, or prose around the JSON.",
    );
    prompt
}

pub async fn prioritize_tasks(
    model: &dyn TextModel,
    request: &PrioritizationRequest,
) -> Result<PrioritizationResult, AssistError> {
    let output = model
        .complete(SYSTEM_PROMPT, &render_prompt(&request.tasks))
        .await?;

    let mut result: PrioritizationResult = decode_payload(&output)?;

    // The ordering is only as reliable as the model; force it back into a
    // permutation of the input names before anyone correlates on them.
    let input_names: Vec<String> = request.tasks.iter().map(|t| t.name.clone()).collect();
    result.prioritized_tasks = reconcile_order(&input_names, &result.prioritized_tasks);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new(
                "Lab Report 1",
                NaiveDate::from_ymd_opt(2026, 9, 15).unwrap(),
                "Applied Physics",
            )
            .with_weightage(20.0)
            .with_difficulty("Hard"),
            Task::new(
                "Circuit Analysis Problems",
                NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
                "Electrical science",
            )
            .with_weightage(10.0)
            .with_difficulty("Easy"),
        ]
    }

    #[test]
    fn test_render_enumerates_every_task_field() {
        let prompt = render_prompt(&sample_tasks());
        assert!(prompt.contains(
            "- Name: Lab Report 1, Deadline: 2026-09-15, Subject: Applied Physics, \
             Weightage: 20%, Difficulty: Hard"
        ));
        assert!(prompt.contains(
            "- Name: Circuit Analysis Problems, Deadline: 2026-09-12, Subject: \
             Electrical science, Weightage: 10%, Difficulty: Easy"
        ));
    }

    #[test]
    fn test_render_demands_exact_output_shape() {
        let prompt = render_prompt(&sample_tasks());
        assert!(prompt.contains("prioritizedTasks"));
        assert!(prompt.contains("reasoning"));
        assert!(prompt.contains("nothing else"));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_prompt(&sample_tasks()), render_prompt(&sample_tasks()));
    }
}
