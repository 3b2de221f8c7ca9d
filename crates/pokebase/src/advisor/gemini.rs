use crate::config::{ConfigError, GeminiConfig};
use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Finite, non-restartable sequence of generated text chunks.
pub type CompletionChunks = BoxStream<'static, Result<String, CompletionError>>;

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion service error {status}: {message}")]
    Service { status: u16, message: String },
    #[error("unreadable completion chunk: {0}")]
    Decode(String),
}

/// Seam for the text-generation service so tests can substitute a canned
/// model. The generated text is returned untouched; `None` means the service
/// produced no candidate text.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, CompletionError>;

    async fn complete_streaming(&self, prompt: &str)
        -> Result<CompletionChunks, CompletionError>;
}

/// HTTP client for the Gemini generateContent API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, ConfigError> {
        let api_key = config.require_api_key()?.to_string();
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            http: reqwest::Client::new(),
        })
    }

    async fn post(
        &self,
        action: &str,
        query: &[(&str, &str)],
        prompt: &str,
    ) -> Result<reqwest::Response, CompletionError> {
        let url = format!("{}/models/{}:{}", self.base_url, self.model, action);
        debug!(model = %self.model, %action, "forwarding prompt to completion service");

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.http.post(&url).query(query).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Service {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl CompletionModel for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, CompletionError> {
        let response = self
            .post("generateContent", &[("key", self.api_key.as_str())], prompt)
            .await?;
        let body: GenerateContentResponse = response.json().await?;
        Ok(extract_text(&body))
    }

    async fn complete_streaming(
        &self,
        prompt: &str,
    ) -> Result<CompletionChunks, CompletionError> {
        let response = self
            .post(
                "streamGenerateContent",
                &[("alt", "sse"), ("key", self.api_key.as_str())],
                prompt,
            )
            .await?;

        let mut bytes = response.bytes_stream();
        let chunks = async_stream::try_stream! {
            let mut pending: Vec<u8> = Vec::new();
            while let Some(piece) = bytes.next().await {
                let piece = piece.map_err(CompletionError::Transport)?;
                pending.extend_from_slice(&piece);

                while let Some(end) = find_event_end(&pending) {
                    let event: Vec<u8> = pending.drain(..end).collect();
                    let event = std::str::from_utf8(&event)
                        .map_err(|err| CompletionError::Decode(err.to_string()))?
                        .to_string();
                    if let Some(text) = parse_sse_event(&event)? {
                        yield text;
                    }
                }
            }
        };

        Ok(chunks.boxed())
    }
}

/// Position just past the blank line terminating the first complete SSE event.
fn find_event_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(2).position(|pair| pair == b"\n\n").map(|at| at + 2)
}

/// Pull the generated text out of one SSE event. Non-data lines yield nothing;
/// a data line that fails to parse is an unreadable chunk.
fn parse_sse_event(event: &str) -> Result<Option<String>, CompletionError> {
    for line in event.lines() {
        let line = line.trim_end_matches('\r');
        let Some(payload) = line.strip_prefix("data:") else {
            continue;
        };
        let payload = payload.trim();
        if payload.is_empty() {
            continue;
        }

        let body: GenerateContentResponse = serde_json::from_str(payload)
            .map_err(|err| CompletionError::Decode(err.to_string()))?;
        return Ok(extract_text(&body));
    }

    Ok(None)
}

fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let text: String = candidate
        .content
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
