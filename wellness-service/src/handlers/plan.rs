use axum::{extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

use crate::models::{DietRequest, WellnessPlan};
use crate::services::{
    build_plan_prompt, compose_query, record_plan_request, record_provider_call,
};
use crate::startup::AppState;

/// Record the outcome of a provider call and convert its error.
fn observe<T, E>(provider: &str, result: Result<T, E>) -> Result<T, AppError>
where
    E: Into<AppError> + std::fmt::Display,
{
    match result {
        Ok(value) => {
            record_provider_call(provider, "ok");
            Ok(value)
        }
        Err(err) => {
            record_provider_call(provider, "error");
            record_plan_request("failed");
            tracing::error!(provider, error = %err, "Provider call failed");
            Err(err.into())
        }
    }
}

/// `POST /generate-diet-plan`
///
/// validate -> compose query -> embed -> retrieve -> build prompt -> generate.
/// Any stage failure short-circuits; no partial results are returned.
#[tracing::instrument(skip(state, request))]
pub async fn generate_diet_plan(
    State(state): State<AppState>,
    Json(request): Json<DietRequest>,
) -> Result<Json<WellnessPlan>, AppError> {
    if let Err(err) = request.validate() {
        record_plan_request("rejected");
        return Err(err.into());
    }

    let query = compose_query(&request);
    tracing::debug!(query_len = query.len(), "Composed retrieval query");

    let vector = observe("gemini_embedding", state.embedder.embed(&query).await)?;

    let candidates = observe(
        "pinecone",
        state
            .index
            .query(
                &vector,
                &request.diet_preferences.allergies,
                state.config.pinecone.top_k,
            )
            .await,
    )?;

    if candidates.is_empty() {
        record_plan_request("no_candidates");
        return Err(AppError::NotFound(anyhow::anyhow!(
            "no suitable foods match the profile and allergy constraints"
        )));
    }

    let prompt = build_plan_prompt(&request, &candidates);
    let plan = observe(
        "gemini_generation",
        state.generator.generate_plan(&prompt).await,
    )?;

    record_plan_request("ok");
    tracing::info!(
        candidate_count = candidates.len(),
        "Generated wellness plan"
    );

    Ok(Json(plan))
}
