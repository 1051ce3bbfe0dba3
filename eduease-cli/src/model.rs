//! Pick a model from config + stored auth.

use anyhow::{bail, Result};
use eduease_ai::{AnthropicModel, OpenAiModel, TextModel};

use crate::auth;
use crate::config::Config;

const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-latest";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Resolve the configured provider against the stored keys.
///
/// Falls back to whichever provider has a key when the configured one has
/// none; the configured model name only applies to the configured provider.
pub fn resolve_model(config: &Config) -> Result<Box<dyn TextModel>> {
    let auth = auth::load_auth()?;

    match config.llm.provider.as_str() {
        "anthropic" => {
            if let Some(token) = auth.anthropic_token {
                return Ok(Box::new(AnthropicModel::new(token, config.llm.model.clone())));
            }
            if let Some(key) = auth.openai_api_key {
                return Ok(Box::new(
                    OpenAiModel::new(key, DEFAULT_OPENAI_MODEL)
                        .with_temperature(config.llm.temperature),
                ));
            }
        }
        "openai" => {
            if let Some(key) = auth.openai_api_key {
                return Ok(Box::new(
                    OpenAiModel::new(key, config.llm.model.clone())
                        .with_temperature(config.llm.temperature),
                ));
            }
            if let Some(token) = auth.anthropic_token {
                return Ok(Box::new(AnthropicModel::new(token, DEFAULT_ANTHROPIC_MODEL)));
            }
        }
        other => bail!("unknown provider in config.toml: {other} (expected \"anthropic\" or \"openai\")"),
    }

    bail!(
        "No model configured. Add a key via: eduease auth paste-openai-api-key (or paste-anthropic-token), or run with --offline."
    )
}
