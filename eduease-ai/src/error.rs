//! Error taxonomy for the assist services.
//!
//! Services raise these; the action gateway is the single place they are
//! absorbed into safe defaults. Nothing here is fatal to the host.

use thiserror::Error;

/// Failure of the underlying model call itself.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model not configured: {0}")]
    NotConfigured(String),

    /// Request never produced a usable response (network, timeout, decode).
    #[error("request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status.
    #[error("provider error: {0}")]
    Provider(String),
}

/// What a service call can fail with.
#[derive(Debug, Error)]
pub enum AssistError {
    /// The model invocation failed before we had any payload to validate.
    #[error("model invocation failed: {0}")]
    Model(#[from] ModelError),

    /// The model answered, but the payload does not match the contract
    /// (unparseable, missing field, wrong type, extra structure).
    #[error("schema validation failed: {0}")]
    Schema(String),
}
