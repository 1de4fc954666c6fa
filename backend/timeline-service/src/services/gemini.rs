/// Generation provider client
///
/// Wraps the Gemini generateContent call behind the `SummaryProvider`
/// trait so the summarization pipeline can be exercised without a network.
/// The response is modeled with every nesting level optional: absent
/// candidates, content or parts route to the empty-result path instead of a
/// decode failure.
use crate::config::GeminiConfig;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Outcome of a single provider invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutput {
    /// The provider returned usable text.
    Text(String),
    /// The call succeeded but yielded no candidates/parts/text.
    Empty,
}

/// Provider-side failures (network, timeout, non-2xx, unparsable body).
#[derive(Debug, thiserror::Error)]
#[error("provider error: {0}")]
pub struct ProviderError(pub String);

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Seam between the summarization pipeline and the external generation
/// provider. One call per request; no retries.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Generate text for a free-form prompt.
    async fn generate(&self, prompt: &str) -> ProviderResult<ProviderOutput>;

    /// Provider name for logging.
    fn name(&self) -> &str;
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// First candidate's first text segment, if any level is present.
    pub(crate) fn first_candidate_text(&self) -> Option<&str> {
        self.candidates
            .as_deref()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.as_deref())
            .and_then(|parts| parts.first())
            .and_then(|part| part.text.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}

/// Gemini generateContent client.
pub struct GeminiClient {
    client: HttpClient,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn from_config(config: &GeminiConfig) -> ProviderResult<Self> {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl SummaryProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> ProviderResult<ProviderOutput> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.url())
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError(format!("Gemini API call failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!(%status, "Gemini API returned non-success status");
            return Err(ProviderError(format!(
                "Gemini API status {}: {}",
                status, error_text
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError(format!("Gemini response parse error: {}", e)))?;

        match result.first_candidate_text() {
            Some(text) => Ok(ProviderOutput::Text(text.to_string())),
            None => Ok(ProviderOutput::Empty),
        }
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
