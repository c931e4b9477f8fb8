pub mod metrics;
pub mod prompt;
pub mod providers;
pub mod query;

pub use metrics::{get_metrics, init_metrics, record_plan_request, record_provider_call};
pub use prompt::build_plan_prompt;
pub use providers::{
    EmbeddingProvider, FoodIndex, GeminiEmbeddingProvider, GeminiPlanProvider, GenerationError,
    MockEmbeddingProvider, MockFoodIndex, MockPlanProvider, PineconeFoodIndex, PlanProvider,
    RetrievalError,
};
pub use query::compose_query;
