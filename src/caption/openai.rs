//! Captioning client for OpenAI-compatible vision endpoints.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::blocking::Client;
use tracing::{debug, info};

use super::{CAPTION_PROMPT, Captioner};
use crate::error::{Error, Result};

// --- Chat-completions wire structs ---

#[derive(serde::Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(serde::Serialize)]
struct ChatMessage {
    role: String,
    content: serde_json::Value,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(serde::Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Blocking client for a vision chat-completions endpoint. One request per
/// image, no retry or backoff; a transport or shape error aborts the batch.
pub struct OpenAiCaptioner {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

const MAX_CAPTION_TOKENS: u32 = 300;

impl OpenAiCaptioner {
    pub fn new(endpoint: &str, model: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!("Captioner configured: endpoint={}, model={}", endpoint, model);

        Ok(Self {
            client,
            endpoint,
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

impl Captioner for OpenAiCaptioner {
    fn caption_jpeg(&self, jpeg: &[u8]) -> Result<String> {
        let encoded = STANDARD.encode(jpeg);
        let content = serde_json::json!([
            { "type": "text", "text": CAPTION_PROMPT },
            {
                "type": "image_url",
                "image_url": { "url": format!("data:image/jpeg;base64,{encoded}") },
            },
        ]);
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content,
            }],
            max_tokens: MAX_CAPTION_TOKENS,
        };

        debug!("Requesting caption for {} JPEG bytes", jpeg.len());
        let response = self
            .client
            .post(format!("{}/chat/completions", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?
            .error_for_status()?;

        let parsed: ChatResponse = response.json()?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::CaptionResponse("response contained no choices".to_string()))?;

        Ok(choice.message.content.trim().to_string())
    }
}
