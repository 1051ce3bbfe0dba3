//! eduease-ai: model capability seam, assist services, and the fail-safe gateway

pub mod error;
pub mod gateway;
pub mod mock;
pub mod model;
pub mod parse;
pub mod prioritize;
pub mod providers;
pub mod stress;

pub use error::{AssistError, ModelError};
pub use gateway::{prioritize, reduce_stress, PRIORITIZATION_FALLBACK_REASONING};
pub use mock::MockModel;
pub use model::TextModel;
pub use prioritize::prioritize_tasks;
pub use providers::{AnthropicModel, OpenAiModel};
pub use stress::score_stress;
