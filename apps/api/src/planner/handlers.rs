//! Axum route handlers for plan generation and the chatbot.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::llm_client::prompts::{CHAT_TEMPERATURE, PLAN_TEMPERATURE};
use crate::planner::generator::invoke;
use crate::planner::profile::{profile_options, DietProfile, ProfileOptions, WorkoutProfile};
use crate::planner::prompts::{build_diet_request, build_workout_request};
use crate::session::{Feature, SessionContext};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// Markdown exactly as returned by the model.
    pub plan: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/plans/options
pub async fn handle_plan_options() -> Json<ProfileOptions> {
    Json(profile_options())
}

/// POST /api/v1/plans/workout
///
/// Available on every tier.
pub async fn handle_workout_plan(
    State(state): State<AppState>,
    session: SessionContext,
    ApiJson(profile): ApiJson<WorkoutProfile>,
) -> Result<Json<PlanResponse>, AppError> {
    session.require(Feature::WorkoutPlan)?;
    let generator = state.generator()?;
    profile.validate()?;

    let plan = invoke(generator, &build_workout_request(&profile), PLAN_TEMPERATURE).await?;
    Ok(Json(PlanResponse { plan }))
}

/// POST /api/v1/plans/diet
///
/// Premium only.
pub async fn handle_diet_plan(
    State(state): State<AppState>,
    session: SessionContext,
    ApiJson(profile): ApiJson<DietProfile>,
) -> Result<Json<PlanResponse>, AppError> {
    session.require(Feature::DietPlan)?;
    let generator = state.generator()?;
    profile.validate()?;

    let plan = invoke(generator, &build_diet_request(&profile), PLAN_TEMPERATURE).await?;
    Ok(Json(PlanResponse { plan }))
}

/// POST /api/v1/chat
///
/// Premium only. The question is forwarded as-is.
pub async fn handle_chat(
    State(state): State<AppState>,
    session: SessionContext,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    session.require(Feature::Chatbot)?;
    let generator = state.generator()?;
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let answer = invoke(generator, &request.question, CHAT_TEMPERATURE).await?;
    Ok(Json(ChatResponse { answer }))
}
