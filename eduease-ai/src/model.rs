//! Generative-model capability seam.
//!
//! Services receive the model as an explicit dependency (no module-level
//! singleton) so tests can swap in a canned client, see `mock`.

use async_trait::async_trait;

use crate::error::ModelError;

/// One-shot text completion: system instruction + rendered prompt in, raw
/// model text out. Implementations must be safe to share across tasks.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ModelError>;
}
