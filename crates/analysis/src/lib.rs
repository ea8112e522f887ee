//! Optional transcript analysis client.
//!
//! Sends a raw call transcript to an external service and returns free-text
//! "pain points" to enrich a proposal. The result is advisory only: it is
//! never an input to pricing, and a failed analysis must surface to the
//! user without blocking or corrupting the quoting pipeline.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("transcript is empty")]
    EmptyTranscript,
    #[error("analysis request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("analysis service returned {status}: {message}")]
    Service { status: u16, message: String, correlation_id: String },
}

impl AnalysisError {
    /// User-safe message for display next to the proposal form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyTranscript => "Paste a call transcript before requesting analysis.",
            Self::Http(_) => {
                "The analysis service could not be reached. Pricing is unaffected; retry shortly."
            }
            Self::Service { .. } => {
                "The analysis service rejected the request. Pricing is unaffected."
            }
        }
    }
}

#[async_trait]
pub trait TranscriptAnalyzer: Send + Sync {
    /// Extract advisory pain points from a raw call transcript.
    async fn extract_pain_points(&self, transcript: &str) -> Result<String, AnalysisError>;
}

#[derive(Serialize)]
struct AnalysisRequest<'a> {
    transcript: &'a str,
}

#[derive(Deserialize)]
struct AnalysisResponse {
    pain_points: String,
}

/// HTTP-backed analyzer. One request per transcript, bearer-authenticated,
/// tagged with a correlation id for cross-service log matching.
pub struct HttpTranscriptAnalyzer {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
}

impl HttpTranscriptAnalyzer {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, AnalysisError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint: endpoint.into(), api_key })
    }
}

#[async_trait]
impl TranscriptAnalyzer for HttpTranscriptAnalyzer {
    async fn extract_pain_points(&self, transcript: &str) -> Result<String, AnalysisError> {
        if transcript.trim().is_empty() {
            return Err(AnalysisError::EmptyTranscript);
        }

        let correlation_id = Uuid::new_v4().to_string();
        tracing::info!(
            correlation_id = %correlation_id,
            transcript_chars = transcript.len(),
            "requesting transcript analysis"
        );

        let mut request = self
            .client
            .post(&self.endpoint)
            .header("x-correlation-id", &correlation_id)
            .json(&AnalysisRequest { transcript });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(
                correlation_id = %correlation_id,
                status = status.as_u16(),
                "transcript analysis rejected"
            );
            return Err(AnalysisError::Service {
                status: status.as_u16(),
                message,
                correlation_id,
            });
        }

        let payload: AnalysisResponse = response.json().await?;
        Ok(payload.pain_points)
    }
}
