use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::nutrition::{compute_nutrition, FoodEntry, Nutrition, FOODS, GRAMS_RANGE};
use crate::session::{Feature, SessionContext};

#[derive(Debug, Deserialize)]
pub struct NutritionRequest {
    pub food: String,
    pub grams: u32,
}

#[derive(Debug, Serialize)]
pub struct NutritionResponse {
    pub food: String,
    pub grams: u32,
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

/// GET /api/v1/nutrition/foods
pub async fn handle_list_foods() -> Json<&'static [FoodEntry]> {
    Json(FOODS)
}

/// POST /api/v1/nutrition
///
/// Premium only.
pub async fn handle_compute_nutrition(
    session: SessionContext,
    ApiJson(request): ApiJson<NutritionRequest>,
) -> Result<Json<NutritionResponse>, AppError> {
    session.require(Feature::CalorieTracker)?;

    if !GRAMS_RANGE.contains(&request.grams) {
        return Err(AppError::Validation(format!(
            "grams must be between {} and {}, got {}",
            GRAMS_RANGE.start(),
            GRAMS_RANGE.end(),
            request.grams
        )));
    }

    let nutrition = compute_nutrition(&request.food, f64::from(request.grams))
        .ok_or_else(|| AppError::Validation(format!("Unknown food: '{}'", request.food)))?;

    Ok(Json(NutritionResponse {
        food: request.food,
        grams: request.grams,
        nutrition,
    }))
}
