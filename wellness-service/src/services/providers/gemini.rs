//! Gemini providers: plan generation via `generateContent` and query
//! embeddings via `embedContent`.

use super::{EmbeddingProvider, GenerationError, PlanProvider, RetrievalError};
use crate::config::GeminiSettings;
use crate::models::WellnessPlan;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

fn build_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(120))
        .build()
        .expect("Failed to create HTTP client")
}

/// Plan generation over the Gemini text model.
pub struct GeminiPlanProvider {
    settings: GeminiSettings,
    client: Client,
}

impl GeminiPlanProvider {
    pub fn new(settings: GeminiSettings) -> Self {
        Self {
            settings,
            client: build_client(),
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            GEMINI_API_BASE, self.settings.text_model, method, self.settings.api_key
        )
    }
}

/// Strip markdown code fences the model sometimes wraps around JSON output.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}

#[async_trait]
impl PlanProvider for GeminiPlanProvider {
    async fn generate_plan(&self, prompt: &str) -> Result<WellnessPlan, GenerationError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
            }),
        };

        let url = self.api_url("generateContent");

        tracing::debug!(
            model = %self.settings.text_model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(GenerationError::RateLimited);
            }

            return Err(GenerationError::Api(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Api(format!("Failed to parse response: {}", e)))?;

        let text = api_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or(GenerationError::EmptyResponse)?;

        let cleaned = strip_code_fences(&text);

        serde_json::from_str::<WellnessPlan>(cleaned)
            .map_err(|e| GenerationError::MalformedPlan(e.to_string()))
    }

    async fn health_check(&self) -> Result<(), GenerationError> {
        if self.settings.api_key.is_empty() {
            return Err(GenerationError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }
        Ok(())
    }
}

/// Query embeddings over the Gemini embedding model.
pub struct GeminiEmbeddingProvider {
    settings: GeminiSettings,
    client: Client,
}

impl GeminiEmbeddingProvider {
    pub fn new(settings: GeminiSettings) -> Self {
        Self {
            settings,
            client: build_client(),
        }
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:embedContent?key={}",
            GEMINI_API_BASE, self.settings.embedding_model, self.settings.api_key
        )
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RetrievalError> {
        let request = EmbedContentRequest {
            content: EmbedContent {
                parts: vec![TextPart {
                    text: text.to_string(),
                }],
            },
        };

        tracing::debug!(
            model = %self.settings.embedding_model,
            text_len = text.len(),
            "Requesting embedding from Gemini API"
        );

        let response = self
            .client
            .post(self.api_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| RetrievalError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RetrievalError::Api(format!(
                "Gemini embedding API error {}: {}",
                status, error_text
            )));
        }

        let api_response: EmbedContentResponse = response.json().await.map_err(|e| {
            RetrievalError::MalformedResponse(format!("Failed to parse embedding: {}", e))
        })?;

        if api_response.embedding.values.is_empty() {
            return Err(RetrievalError::MalformedResponse(
                "embedding has no values".to_string(),
            ));
        }

        Ok(api_response.embedding.values)
    }

    async fn health_check(&self) -> Result<(), RetrievalError> {
        if self.settings.api_key.is_empty() {
            return Err(RetrievalError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Content,
}

#[derive(Debug, Serialize)]
struct EmbedContentRequest {
    content: EmbedContent,
}

#[derive(Debug, Serialize)]
struct EmbedContent {
    parts: Vec<TextPart>,
}

#[derive(Debug, Deserialize)]
struct EmbedContentResponse {
    embedding: EmbeddingValues,
}

#[derive(Debug, Deserialize)]
struct EmbeddingValues {
    #[serde(default)]
    values: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::strip_code_fences;

    #[test]
    fn strips_json_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn strips_bare_fences() {
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
    }

    #[test]
    fn leaves_plain_json_untouched() {
        assert_eq!(strip_code_fences("  {\"a\":1} "), "{\"a\":1}");
    }
}
