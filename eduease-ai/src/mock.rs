//! Mock model for tests (no API needed).
//!
//! Pops scripted outcomes in order and records every prompt it was sent so
//! tests can assert on the rendered contract.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ModelError;
use crate::model::TextModel;

#[derive(Debug, Default)]
pub struct MockModel {
    script: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<(String, String)>>,
}

impl MockModel {
    /// One canned reply.
    pub fn replying(reply: impl Into<String>) -> Self {
        let mock = Self::default();
        mock.push(Ok(reply.into()));
        mock
    }

    /// One forced invocation failure.
    pub fn failing(message: impl Into<String>) -> Self {
        let mock = Self::default();
        mock.push(Err(message.into()));
        mock
    }

    pub fn push(&self, outcome: Result<String, String>) {
        self.script.lock().unwrap().push_back(outcome);
    }

    /// (system, prompt) pairs seen so far, oldest first.
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for MockModel {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ModelError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));

        match self.script.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(ModelError::Provider(message)),
            None => Err(ModelError::NotConfigured("mock script exhausted".to_string())),
        }
    }
}
