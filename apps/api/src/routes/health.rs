use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::{AppState, AI_DISABLED_NOTICE};

/// GET /health
/// Returns service status and whether AI generation is available.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let ai_enabled = state.ai_enabled();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "fitpro-api",
        "ai_enabled": ai_enabled,
        "notice": (!ai_enabled).then_some(AI_DISABLED_NOTICE),
    }))
}
