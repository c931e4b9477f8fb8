//! Pinecone food index client.
//!
//! Queries the serverless index over its data-plane REST API, combining
//! semantic search with a hard metadata exclusion on allergens.

use super::{FoodIndex, RetrievalError};
use crate::config::PineconeSettings;
use crate::models::FoodCandidate;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub struct PineconeFoodIndex {
    settings: PineconeSettings,
    client: Client,
}

impl PineconeFoodIndex {
    pub fn new(settings: PineconeSettings) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { settings, client }
    }

    fn query_url(&self) -> String {
        format!("{}/query", self.settings.index_host.trim_end_matches('/'))
    }
}

#[async_trait]
impl FoodIndex for PineconeFoodIndex {
    async fn query(
        &self,
        vector: &[f32],
        excluded_allergens: &[String],
        top_k: usize,
    ) -> Result<Vec<FoodCandidate>, RetrievalError> {
        // Allergies are hard constraints, applied as a metadata filter rather
        // than left to semantic similarity.
        let filter = if excluded_allergens.is_empty() {
            None
        } else {
            Some(json!({ "Allergen Info": { "$nin": excluded_allergens } }))
        };

        let request = QueryRequest {
            vector,
            top_k,
            include_metadata: true,
            filter,
        };

        tracing::debug!(
            top_k,
            allergen_count = excluded_allergens.len(),
            "Querying Pinecone index"
        );

        let response = self
            .client
            .post(self.query_url())
            .header("Api-Key", &self.settings.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| RetrievalError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RetrievalError::Api(format!(
                "Pinecone API error {}: {}",
                status, error_text
            )));
        }

        let api_response: QueryResponse = response.json().await.map_err(|e| {
            RetrievalError::MalformedResponse(format!("Failed to parse query response: {}", e))
        })?;

        let candidates = api_response
            .matches
            .into_iter()
            .map(|m| {
                let metadata = m.metadata.unwrap_or_default();
                FoodCandidate {
                    name: metadata.dish_name.unwrap_or_else(|| m.id.clone()),
                    category: metadata.category,
                    id: m.id,
                    score: m.score,
                }
            })
            .collect();

        Ok(candidates)
    }

    async fn health_check(&self) -> Result<(), RetrievalError> {
        if self.settings.api_key.is_empty() {
            return Err(RetrievalError::NotConfigured(
                "Pinecone API key not configured".to_string(),
            ));
        }
        if self.settings.index_host.is_empty() {
            return Err(RetrievalError::NotConfigured(
                "Pinecone index host not configured".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Pinecone API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: &'a [f32],
    top_k: usize,
    include_metadata: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<Match>,
}

#[derive(Debug, Deserialize)]
struct Match {
    id: String,
    #[serde(default)]
    score: f32,
    #[serde(default)]
    metadata: Option<MatchMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct MatchMetadata {
    #[serde(rename = "Dish Name")]
    dish_name: Option<String>,
    #[serde(rename = "Category")]
    category: Option<String>,
}
