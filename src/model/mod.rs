use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::error::{RelayError, Result};
use crate::web::models::{Message, Role};

pub const SYSTEM_PROMPT: &str =
    "You are an AI expert in Nuclear Energy, Green Environment, and Waste Management.";

/// The fixed two-entry prompt: persona first, then the user's text as-is.
pub fn build_prompt(user_message: &str) -> Vec<Message> {
    vec![
        Message {
            role: Role::System,
            content: SYSTEM_PROMPT.to_string(),
        },
        Message {
            role: Role::User,
            content: user_message.to_string(),
        },
    ]
}

#[derive(Debug, Deserialize)]
pub struct Completion {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl Completion {
    /// Text of the first candidate. Later candidates are ignored.
    pub fn into_first_reply(self) -> Result<String> {
        self.choices
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(RelayError::UpstreamEmptyResult)
    }
}

#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<Completion>;
}

// Client for an OpenAI-compatible chat completions API
pub struct OpenAiModel {
    base_url: String,
    model: String,
    api_key: String,
    client: Client,
}

impl OpenAiModel {
    pub fn new(config: &Config) -> Result<Self> {
        info!("Using completion provider at {} with model {}", config.base_url, config.model);

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            info!("Upstream timeout set to {:?}", timeout);
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl ChatModel for OpenAiModel {
    async fn complete(&self, messages: &[Message]) -> Result<Completion> {
        let url = format!("{}/chat/completions", self.base_url);

        let payload = json!({
            "model": self.model,
            "messages": messages,
        });
        debug!("Payload: {}", payload);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!("Provider rejected credential with status {}", status);
            return Err(RelayError::UpstreamAuthFailure(status.as_u16()));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RelayError::UpstreamUnavailable(format!(
                "status {}: {}",
                status, error_text
            )));
        }

        let completion: Completion = response.json().await?;
        debug!(
            "Provider returned {} choice(s)",
            completion.choices.as_ref().map_or(0, Vec::len)
        );
        Ok(completion)
    }
}
