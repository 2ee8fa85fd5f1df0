//! HTTP intent oracle.
//!
//! Talks to an OpenAI-style chat-completions endpoint. The call is one-shot
//! and synchronous from the caller's perspective; a current-thread runtime
//! drives the single request.

use std::time::Duration;

use attire_core::errors::{AttireResult, IntentError};
use attire_core::traits::IIntentOracle;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Instruction set sent ahead of every prompt.
const INSTRUCTIONS: &str = "You translate a clothing style prompt into one JSON object with the \
fields: outfit_mode (outfit|single), requested_form (full_look|top_bottom|mono_only|\
mono_with_shoes|single_piece), required_categories (array of top|bottom|shoes|mono), \
optional_categories, target_gender (any|men|women|unisex), vibe_tags (max 3 of streetwear|\
sporty|casual|chic|minimal|vintage|formal|grunge|y2k), colour_hints (black|white|grey|beige|\
brown|red|blue|green|yellow|pink|purple), brand_focus, team_focus, sport_context (none|\
football|basketball|tennis|running|cycling|motorsport), fit_preference (oversized|regular|\
slim|cropped|mixed), specific_items. Respond with the JSON object only.";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Environment variables the CLI configures the oracle from.
pub const ENV_URL: &str = "ATTIRE_ORACLE_URL";
pub const ENV_MODEL: &str = "ATTIRE_ORACLE_MODEL";
pub const ENV_KEY: &str = "ATTIRE_ORACLE_KEY";

/// Chat-completions oracle client.
pub struct HttpOracle {
    base_url: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl HttpOracle {
    pub fn new(base_url: String, model: String, api_key: Option<String>) -> Self {
        Self {
            base_url,
            model,
            api_key,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build from `ATTIRE_ORACLE_*` environment variables.
    /// Returns `None` when no endpoint is configured.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var(ENV_URL).ok()?;
        let model = std::env::var(ENV_MODEL).unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let api_key = std::env::var(ENV_KEY).ok();
        Some(Self::new(base_url, model, api_key))
    }
}

impl IIntentOracle for HttpOracle {
    fn complete(&self, prompt: &str) -> AttireResult<String> {
        let url = format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'));
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: INSTRUCTIONS.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
        };

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| IntentError::OracleUnreachable {
                reason: format!("runtime error: {e}"),
            })?;

        let timeout = self.timeout;
        let api_key = self.api_key.clone();
        let content: AttireResult<String> = rt.block_on(async {
            let client = reqwest::Client::new();
            let mut builder = client.post(&url).timeout(timeout).json(&request);
            if let Some(key) = &api_key {
                builder = builder.bearer_auth(key);
            }
            let response = builder.send().await.map_err(|e| IntentError::OracleUnreachable {
                reason: e.to_string(),
            })?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(IntentError::OracleStatus { status, body }.into());
            }

            let parsed: ChatResponse =
                response.json().await.map_err(|e| IntentError::OracleUnreachable {
                    reason: format!("JSON decode error: {e}"),
                })?;

            parsed
                .choices
                .into_iter()
                .next()
                .map(|c| c.message.content)
                .ok_or_else(|| IntentError::NoJsonPayload.into())
        });

        let content = content?;
        debug!(model = %self.model, bytes = content.len(), "oracle responded");
        Ok(content)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
