/// LLM Client — the single point of entry for all Groq API calls in Shortlist.
///
/// ARCHITECTURAL RULE: No other module may call the Groq API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: llama-3.1-8b-instant (hardcoded — do not make configurable to
/// prevent drift). One attempt per call: a failed completion degrades the
/// single resume being scored, so retry loops only add latency to the batch.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for all LLM calls in Shortlist.
pub const MODEL: &str = "llama-3.1-8b-instant";
/// Near-deterministic sampling: screening runs should be reproducible.
const TEMPERATURE: f32 = 0.1;
const MAX_TOKENS: u32 = 1000;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion contained no choices")]
    EmptyCompletion,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct GroqError {
    error: GroqErrorBody,
}

#[derive(Debug, Deserialize)]
struct GroqErrorBody {
    message: String,
}

/// Seam between the scorer and the remote completion service.
///
/// `LlmClient` is the production implementation; tests substitute canned or
/// scripted backends so the scorer and batch loop run without network access.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Submits one system + user message pair and returns the raw text reply.
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

/// The single Groq client used by the whole service.
/// Constructed once at startup and shared; holds its own connection pool.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    /// Construction can fail (TLS backend init); the caller downgrades that
    /// to a disabled scorer rather than aborting startup.
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            api_key,
        })
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Groq wraps errors in {"error": {"message": ...}}; fall back to
            // the raw body when the shape differs.
            let message = serde_json::from_str::<GroqError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;
        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyCompletion)?;

        debug!("LLM call succeeded ({} chars)", choice.message.content.len());

        Ok(choice.message.content.trim().to_string())
    }
}
