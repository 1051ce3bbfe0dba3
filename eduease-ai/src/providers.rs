//! HTTP-backed model providers: Anthropic messages and OpenAI chat
//! completions. Keys are injected by the caller; nothing is read from the
//! environment here.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::model::TextModel;

const ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";

// Enough room for a reasoning paragraph plus the JSON envelope.
const MAX_TOKENS: i32 = 1024;

pub struct AnthropicModel {
    client: reqwest::Client,
    token: String,
    model: String,
}

impl AnthropicModel {
    pub fn new(token: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextModel for AnthropicModel {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ModelError> {
        #[derive(Serialize)]
        struct Msg {
            role: String,
            content: String,
        }

        #[derive(Serialize)]
        struct Req {
            model: String,
            max_tokens: i32,
            system: String,
            messages: Vec<Msg>,
        }

        #[derive(Deserialize)]
        struct Resp {
            content: Vec<ContentBlock>,
        }

        #[derive(Deserialize)]
        struct ContentBlock {
            #[serde(rename = "type")]
            t: String,
            text: Option<String>,
        }

        let body = Req {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            system: system.to_string(),
            messages: vec![Msg {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token))
                .map_err(|e| ModelError::Request(format!("anthropic auth header: {e}")))?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static("2023-06-01"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let resp = self
            .client
            .post(ANTHROPIC_URL)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelError::Request(format!("anthropic request: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            return Err(ModelError::Provider(format!("anthropic error: {status} {txt}")));
        }

        let out: Resp = resp
            .json()
            .await
            .map_err(|e| ModelError::Request(format!("parse anthropic response: {e}")))?;

        let mut s = String::new();
        for b in out.content {
            if b.t == "text" {
                if let Some(t) = b.text {
                    s.push_str(&t);
                }
            }
        }
        Ok(s.trim().to_string())
    }
}

pub struct OpenAiModel {
    client: reqwest::Client,
    key: String,
    model: String,
    temperature: f32,
}

impl OpenAiModel {
    pub fn new(key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            key: key.into(),
            model: model.into(),
            temperature: 0.4,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[async_trait]
impl TextModel for OpenAiModel {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ModelError> {
        #[derive(Serialize)]
        struct Msg {
            role: String,
            content: String,
        }

        #[derive(Serialize)]
        struct Req {
            model: String,
            messages: Vec<Msg>,
            temperature: f32,
        }

        #[derive(Deserialize)]
        struct Resp {
            choices: Vec<Choice>,
        }

        #[derive(Deserialize)]
        struct Choice {
            message: MsgOut,
        }

        #[derive(Deserialize)]
        struct MsgOut {
            content: Option<String>,
        }

        let body = Req {
            model: self.model.clone(),
            messages: vec![
                Msg {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                Msg {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: self.temperature,
        };

        let resp = self
            .client
            .post(OPENAI_URL)
            .header(AUTHORIZATION, format!("Bearer {}", self.key))
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelError::Request(format!("openai request: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            return Err(ModelError::Provider(format!("openai error: {status} {txt}")));
        }

        let out: Resp = resp
            .json()
            .await
            .map_err(|e| ModelError::Request(format!("parse openai response: {e}")))?;

        let content = out
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        Ok(content.trim().to_string())
    }
}
