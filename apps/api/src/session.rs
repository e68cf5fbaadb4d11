//! Per-session user context.
//!
//! Every request names its user in the `x-user-email` header. The extractor
//! validates the address and resolves the effective tier from the store, so a
//! handler only ever sees the context it is handed.

use std::sync::OnceLock;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use regex::Regex;
use serde::Serialize;

use crate::entitlement::store::get_effective_tier;
use crate::errors::AppError;
use crate::models::account::PlanTier;
use crate::state::AppState;

pub const EMAIL_HEADER: &str = "x-user-email";

/// Features the front end offers, with the tier each one needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    WorkoutPlan,
    DietPlan,
    CalorieTracker,
    Chatbot,
}

impl Feature {
    pub fn required_tier(&self) -> PlanTier {
        match self {
            Feature::WorkoutPlan => PlanTier::Basic,
            Feature::DietPlan | Feature::CalorieTracker | Feature::Chatbot => PlanTier::Premium,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::WorkoutPlan => "Workout Plan",
            Feature::DietPlan => "Diet Plan",
            Feature::CalorieTracker => "Calorie Tracker",
            Feature::Chatbot => "Chatbot",
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern is a valid regex")
    })
}

/// Checks the address format. The address itself is kept exactly as entered.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Invalid email format: '{email}'. Please enter a valid email (e.g., example@gmail.com)"
        )))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionContext {
    pub email: String,
    pub tier: PlanTier,
}

impl SessionContext {
    pub fn is_premium(&self) -> bool {
        self.tier == PlanTier::Premium
    }

    pub fn can_use(&self, feature: Feature) -> bool {
        feature.required_tier() == PlanTier::Basic || self.is_premium()
    }

    pub fn require(&self, feature: Feature) -> Result<(), AppError> {
        if self.can_use(feature) {
            Ok(())
        } else {
            Err(AppError::PremiumRequired(feature.display_name()))
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for SessionContext {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let email = parts
            .headers
            .get(EMAIL_HEADER)
            .ok_or_else(|| {
                AppError::Unauthorized(format!("Please enter your email ({EMAIL_HEADER} header)"))
            })?
            .to_str()
            .map_err(|_| AppError::Validation(format!("{EMAIL_HEADER} must be valid text")))?
            .to_string();

        validate_email(&email)?;

        let tier = get_effective_tier(&state.db, &email).await?;
        Ok(SessionContext { email, tier })
    }
}
