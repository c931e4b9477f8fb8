//! Application startup and lifecycle management.

use crate::config::WellnessConfig;
use crate::handlers;
use crate::services::providers::{
    EmbeddingProvider, FoodIndex, GeminiEmbeddingProvider, GeminiPlanProvider, PineconeFoodIndex,
    PlanProvider,
};
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state. Cloned per request; the providers are behind
/// `Arc` and carry no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: WellnessConfig,
    pub embedder: Arc<dyn EmbeddingProvider>,
    pub index: Arc<dyn FoodIndex>,
    pub generator: Arc<dyn PlanProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the real Gemini and Pinecone providers.
    pub async fn build(config: WellnessConfig) -> Result<Self, AppError> {
        let embedder: Arc<dyn EmbeddingProvider> =
            Arc::new(GeminiEmbeddingProvider::new(config.gemini.clone()));
        let index: Arc<dyn FoodIndex> = Arc::new(PineconeFoodIndex::new(config.pinecone.clone()));
        let generator: Arc<dyn PlanProvider> =
            Arc::new(GeminiPlanProvider::new(config.gemini.clone()));

        tracing::info!(
            text_model = %config.gemini.text_model,
            embedding_model = %config.gemini.embedding_model,
            "Initialized Gemini providers"
        );
        tracing::info!(
            index_host = %config.pinecone.index_host,
            top_k = config.pinecone.top_k,
            "Initialized Pinecone food index"
        );

        Self::with_providers(config, embedder, index, generator).await
    }

    /// Build the application with injected providers (used by tests).
    pub async fn with_providers(
        config: WellnessConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn FoodIndex>,
        generator: Arc<dyn PlanProvider>,
    ) -> Result<Self, AppError> {
        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Wellness service listening on port {}", port);

        let state = AppState {
            config,
            embedder,
            index,
            generator,
        };

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = Router::new()
            .route("/health", get(handlers::health::health_check))
            .route("/ready", get(handlers::health::readiness_check))
            .route("/metrics", get(handlers::health::metrics_endpoint))
            .route("/generate-diet-plan", post(handlers::plan::generate_diet_plan))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state);

        axum::serve(self.listener, router).await
    }
}
