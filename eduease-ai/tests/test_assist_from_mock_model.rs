use chrono::NaiveDate;
use eduease_ai::{
    prioritize, prioritize_tasks, reduce_stress, score_stress, AssistError, MockModel,
    PRIORITIZATION_FALLBACK_REASONING,
};
use eduease_core::{signals_from_tasks, PrioritizationRequest, StressRequest, Task};

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

/// Happy path: a conforming reply comes back typed, with both input names.
#[tokio::test]
async fn test_prioritize_returns_both_names_with_reasoning() {
    let mock = MockModel::replying(
        r#"{"prioritizedTasks":["Circuit Analysis Problems","Lab Report 1"],"reasoning":"The circuit problems are due first; the lab report is heavier but has three extra days."}"#,
    );

    let result = prioritize(&mock, sample_tasks()).await;

    assert_eq!(result.prioritized_tasks.len(), 2);
    assert!(result
        .prioritized_tasks
        .contains(&"Lab Report 1".to_string()));
    assert!(result
        .prioritized_tasks
        .contains(&"Circuit Analysis Problems".to_string()));
    assert!(!result.reasoning.is_empty());
    assert_ne!(result.reasoning, PRIORITIZATION_FALLBACK_REASONING);
}

/// The model dropped one task and invented another; the gateway still hands
/// back a permutation of the input names.
#[tokio::test]
async fn test_prioritize_reconciles_unfaithful_ordering() {
    let mock = MockModel::replying(
        r#"{"prioritizedTasks":["Lab Report 1","Biology Quiz"],"reasoning":"made up"}"#,
    );

    let result = prioritize(&mock, sample_tasks()).await;

    assert_eq!(
        result.prioritized_tasks,
        vec!["Lab Report 1", "Circuit Analysis Problems"]
    );
}

/// A fenced reply still validates.
#[tokio::test]
async fn test_prioritize_accepts_fenced_json() {
    let mock = MockModel::replying(
        "```json\n{\"prioritizedTasks\":[\"Lab Report 1\",\"Circuit Analysis Problems\"],\"reasoning\":\"deadline order\"}\n```",
    );

    let result = prioritize(&mock, sample_tasks()).await;
    assert_eq!(result.prioritized_tasks.len(), 2);
    assert_eq!(result.reasoning, "deadline order");
}

/// Forced invocation failure: the documented fallback, exactly.
#[tokio::test]
async fn test_prioritize_fallback_on_model_failure() {
    let mock = MockModel::failing("simulated network error");

    let result = prioritize(&mock, sample_tasks()).await;

    assert!(result.prioritized_tasks.is_empty());
    assert_eq!(result.reasoning, PRIORITIZATION_FALLBACK_REASONING);
}

/// A payload missing a required field is a failure, not a partial result.
#[tokio::test]
async fn test_prioritize_fallback_on_missing_reasoning() {
    let mock = MockModel::replying(r#"{"prioritizedTasks":["Lab Report 1"]}"#);

    let result = prioritize(&mock, sample_tasks()).await;

    assert!(result.prioritized_tasks.is_empty());
    assert_eq!(result.reasoning, PRIORITIZATION_FALLBACK_REASONING);
}

/// Extra keys violate the contract the model was given.
#[tokio::test]
async fn test_prioritize_fallback_on_extra_keys() {
    let mock = MockModel::replying(
        r#"{"prioritizedTasks":["Lab Report 1"],"reasoning":"ok","confidence":0.8}"#,
    );

    let result = prioritize(&mock, sample_tasks()).await;
    assert_eq!(result.reasoning, PRIORITIZATION_FALLBACK_REASONING);
}

#[tokio::test]
async fn test_prioritize_fallback_on_prose_only_reply() {
    let mock = MockModel::replying("I would start with the circuit problems.");

    let result = prioritize(&mock, sample_tasks()).await;
    assert_eq!(result.reasoning, PRIORITIZATION_FALLBACK_REASONING);
}

/// The service (not the gateway) surfaces the error taxonomy.
#[tokio::test]
async fn test_service_error_kinds() {
    let request = PrioritizationRequest {
        tasks: sample_tasks(),
    };

    let failing = MockModel::failing("capability unavailable");
    let err = prioritize_tasks(&failing, &request).await.unwrap_err();
    assert!(matches!(err, AssistError::Model(_)));

    let malformed = MockModel::replying("not json");
    let err = prioritize_tasks(&malformed, &request).await.unwrap_err();
    assert!(matches!(err, AssistError::Schema(_)));
}

/// The rendered prompt enumerates every task's descriptive fields.
#[tokio::test]
async fn test_prioritize_prompt_carries_all_fields() {
    let mock = MockModel::failing("short-circuit");
    let _ = prioritize(&mock, sample_tasks()).await;

    let prompts = mock.prompts();
    assert_eq!(prompts.len(), 1);
    let (_, prompt) = &prompts[0];
    for needle in [
        "Lab Report 1",
        "2026-09-15",
        "Applied Physics",
        "20%",
        "Hard",
        "Circuit Analysis Problems",
        "2026-09-12",
        "Electrical science",
        "10%",
        "Easy",
    ] {
        assert!(prompt.contains(needle), "prompt missing {needle}");
    }
}

#[tokio::test]
async fn test_reduce_stress_success_with_suggestions() {
    let mock = MockModel::replying(
        r#"{"stressScore":68,"suggestions":[{"taskName":"Lab Report 1","newDeadline":"2026-09-22T00:00:00Z","reason":"Push the heaviest report past the circuit deadline."}]}"#,
    );

    let result = reduce_stress(&mock, signals_from_tasks(&sample_tasks()), 70.0).await;

    assert_eq!(result.stress_score, 68.0);
    assert_eq!(result.suggestions.len(), 1);
    assert_eq!(result.suggestions[0].task_name, "Lab Report 1");
}

/// Empty suggestions is "workload balanced", not an error: the score stays.
#[tokio::test]
async fn test_reduce_stress_empty_suggestions_is_success() {
    let mock = MockModel::replying(r#"{"stressScore":35,"suggestions":[]}"#);

    let result = reduce_stress(&mock, signals_from_tasks(&sample_tasks()), 40.0).await;

    assert_eq!(result.stress_score, 35.0);
    assert!(result.suggestions.is_empty());
}

/// Forced failure: the documented fallback, exactly.
#[tokio::test]
async fn test_reduce_stress_fallback_on_model_failure() {
    let mock = MockModel::failing("simulated network error");

    let result = reduce_stress(&mock, signals_from_tasks(&sample_tasks()), 70.0).await;

    assert_eq!(result.stress_score, 0.0);
    assert!(result.suggestions.is_empty());
}

#[tokio::test]
async fn test_reduce_stress_fallback_on_malformed_payload() {
    let mock = MockModel::replying(r#"{"suggestions":[]}"#);

    let result = reduce_stress(&mock, signals_from_tasks(&sample_tasks()), 70.0).await;

    assert_eq!(result.stress_score, 0.0);
    assert!(result.suggestions.is_empty());
}

/// An out-of-range score is clamped on receipt rather than trusted.
#[tokio::test]
async fn test_reduce_stress_clamps_out_of_range_score() {
    let tasks = vec![Task::new(
        "Lab Report 1",
        NaiveDate::from_ymd_opt(2026, 9, 15).unwrap(),
        "Applied Physics",
    )
    .with_weightage(20.0)
    .with_difficulty("Hard")];

    let high = MockModel::replying(r#"{"stressScore":250,"suggestions":[]}"#);
    let result = reduce_stress(&high, signals_from_tasks(&tasks), 70.0).await;
    assert_eq!(result.stress_score, 100.0);

    let low = MockModel::replying(r#"{"stressScore":-10,"suggestions":[]}"#);
    let result = reduce_stress(&low, signals_from_tasks(&tasks), 70.0).await;
    assert_eq!(result.stress_score, 0.0);
}

/// The stress prompt enumerates each signal plus the scalar batch load.
#[tokio::test]
async fn test_stress_prompt_carries_signals_and_batch_load() {
    let mock = MockModel::failing("short-circuit");
    let _ = reduce_stress(&mock, signals_from_tasks(&sample_tasks()), 70.0).await;

    let prompts = mock.prompts();
    assert_eq!(prompts.len(), 1);
    let (_, prompt) = &prompts[0];
    assert!(prompt.contains("2026-09-15T00:00:00Z"));
    assert!(prompt.contains("0.2"));
    assert!(prompt.contains("Difficulty level: 5"));
    assert!(prompt.contains("Current batch load: 70"));
}

/// The service propagates; only the gateway absorbs.
#[tokio::test]
async fn test_score_stress_propagates_schema_error() {
    let request = StressRequest {
        deadlines: signals_from_tasks(&sample_tasks()),
        batch_load: 70.0,
    };
    let mock = MockModel::replying(r#"{"stressScore":"high","suggestions":[]}"#);
    let err = score_stress(&mock, &request).await.unwrap_err();
    assert!(matches!(err, AssistError::Schema(_)));
}
