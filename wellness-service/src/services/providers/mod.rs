//! External service providers.
//!
//! Trait-based abstractions over the embedding, vector-index and generation
//! services so the pipeline can be exercised against mocks.

pub mod gemini;
pub mod mock;
pub mod pinecone;

pub use gemini::{GeminiEmbeddingProvider, GeminiPlanProvider};
pub use mock::{MockEmbeddingProvider, MockFoodIndex, MockPlanProvider};
pub use pinecone::PineconeFoodIndex;

use crate::models::{FoodCandidate, WellnessPlan};
use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

/// Failure talking to the embedding service or the vector index.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Failure talking to the generation service or validating its output.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("Plan does not match the expected schema: {0}")]
    MalformedPlan(String),
}

// Downstream failures surface as 502, never retried or cached.
impl From<RetrievalError> for AppError {
    fn from(err: RetrievalError) -> Self {
        AppError::BadGateway(format!("retrieval failed: {}", err))
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::BadGateway(format!("generation failed: {}", err))
    }
}

/// Turns query text into a vector.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RetrievalError>;

    async fn health_check(&self) -> Result<(), RetrievalError>;
}

/// Similarity search over the food index with allergen exclusion.
#[async_trait]
pub trait FoodIndex: Send + Sync {
    async fn query(
        &self,
        vector: &[f32],
        excluded_allergens: &[String],
        top_k: usize,
    ) -> Result<Vec<FoodCandidate>, RetrievalError>;

    async fn health_check(&self) -> Result<(), RetrievalError>;
}

/// Generates a wellness plan from a prompt and validates its shape.
#[async_trait]
pub trait PlanProvider: Send + Sync {
    async fn generate_plan(&self, prompt: &str) -> Result<WellnessPlan, GenerationError>;

    async fn health_check(&self) -> Result<(), GenerationError>;
}
