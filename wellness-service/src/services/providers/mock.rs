//! Mock providers for testing the pipeline without external services.

use super::{EmbeddingProvider, FoodIndex, GenerationError, PlanProvider, RetrievalError};
use crate::models::{FoodCandidate, WellnessPlan};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

/// Mock embedding provider returning a fixed-dimension vector.
pub struct MockEmbeddingProvider {
    dimension: usize,
    fail: bool,
    call_count: AtomicU64,
}

impl MockEmbeddingProvider {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            fail: false,
            call_count: AtomicU64::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            dimension: 0,
            fail: true,
            call_count: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddingProvider {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, RetrievalError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(RetrievalError::Network(
                "mock embedding service is down".to_string(),
            ));
        }

        Ok(vec![0.1; self.dimension])
    }

    async fn health_check(&self) -> Result<(), RetrievalError> {
        Ok(())
    }
}

/// Mock food index returning a fixed candidate list.
pub struct MockFoodIndex {
    candidates: Vec<FoodCandidate>,
    fail: bool,
    call_count: AtomicU64,
}

impl MockFoodIndex {
    pub fn with_candidates(candidates: Vec<FoodCandidate>) -> Self {
        Self {
            candidates,
            fail: false,
            call_count: AtomicU64::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            candidates: Vec::new(),
            fail: true,
            call_count: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FoodIndex for MockFoodIndex {
    async fn query(
        &self,
        _vector: &[f32],
        _excluded_allergens: &[String],
        top_k: usize,
    ) -> Result<Vec<FoodCandidate>, RetrievalError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(RetrievalError::Api(
                "mock vector index returned an error".to_string(),
            ));
        }

        Ok(self.candidates.iter().take(top_k).cloned().collect())
    }

    async fn health_check(&self) -> Result<(), RetrievalError> {
        Ok(())
    }
}

/// Mock plan provider returning a fixed plan, or simulating model output that
/// fails schema validation.
pub struct MockPlanProvider {
    plan: Option<WellnessPlan>,
    call_count: AtomicU64,
}

impl MockPlanProvider {
    pub fn returning(plan: WellnessPlan) -> Self {
        Self {
            plan: Some(plan),
            call_count: AtomicU64::new(0),
        }
    }

    /// Behaves as if the model emitted text that is not valid plan JSON.
    pub fn malformed() -> Self {
        Self {
            plan: None,
            call_count: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlanProvider for MockPlanProvider {
    async fn generate_plan(&self, _prompt: &str) -> Result<WellnessPlan, GenerationError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match &self.plan {
            Some(plan) => Ok(plan.clone()),
            None => Err(GenerationError::MalformedPlan(
                "expected value at line 1 column 1".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> Result<(), GenerationError> {
        Ok(())
    }
}
