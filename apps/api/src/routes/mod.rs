pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::entitlement::handlers as entitlement;
use crate::nutrition::handlers as nutrition;
use crate::planner::handlers as planner;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Entitlements
        .route("/api/v1/account", get(entitlement::handle_get_account))
        .route("/api/v1/premium", get(entitlement::handle_premium_offer))
        .route(
            "/api/v1/premium/activate",
            post(entitlement::handle_activate),
        )
        // Plan generation
        .route("/api/v1/plans/options", get(planner::handle_plan_options))
        .route("/api/v1/plans/workout", post(planner::handle_workout_plan))
        .route("/api/v1/plans/diet", post(planner::handle_diet_plan))
        .route("/api/v1/chat", post(planner::handle_chat))
        // Calorie tracker
        .route("/api/v1/nutrition/foods", get(nutrition::handle_list_foods))
        .route("/api/v1/nutrition", post(nutrition::handle_compute_nutrition))
        .with_state(state)
}
