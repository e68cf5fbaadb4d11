use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::entitlement::payment::{
    is_accepted_payment_reference, PAYMENT_REFERENCE_PREFIX, PREMIUM_FEATURES, PREMIUM_PRICE_INR,
};
use crate::entitlement::store::{activate, find_account};
use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::models::account::{PlanTier, UserAccount};
use crate::session::SessionContext;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub email: String,
    pub tier: PlanTier,
    /// Raw stored record; `None` for an email that has never paid.
    pub account: Option<UserAccount>,
}

#[derive(Debug, Serialize)]
pub struct PremiumOfferResponse {
    pub tier: PlanTier,
    pub price_inr: u32,
    pub period: &'static str,
    pub payment_link: String,
    pub payment_reference_hint: String,
    pub features: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
pub struct ActivateRequest {
    pub payment_reference: String,
}

#[derive(Debug, Serialize)]
pub struct ActivateResponse {
    pub tier: PlanTier,
    pub account: UserAccount,
    pub message: String,
}

/// GET /api/v1/account
pub async fn handle_get_account(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<Json<AccountResponse>, AppError> {
    let account = find_account(&state.db, &session.email).await?;
    Ok(Json(AccountResponse {
        email: session.email,
        tier: session.tier,
        account,
    }))
}

/// GET /api/v1/premium
pub async fn handle_premium_offer(
    State(state): State<AppState>,
    session: SessionContext,
) -> Json<PremiumOfferResponse> {
    Json(PremiumOfferResponse {
        tier: session.tier,
        price_inr: PREMIUM_PRICE_INR,
        period: "year",
        payment_link: state.config.payment_link.clone(),
        payment_reference_hint: format!("{PAYMENT_REFERENCE_PREFIX}XXXXXXXXXXXX"),
        features: PREMIUM_FEATURES,
    })
}

/// POST /api/v1/premium/activate
///
/// Accepts any reference with the expected prefix; nothing is checked with the
/// payment processor.
pub async fn handle_activate(
    State(state): State<AppState>,
    session: SessionContext,
    ApiJson(request): ApiJson<ActivateRequest>,
) -> Result<Json<ActivateResponse>, AppError> {
    let reference = request.payment_reference.as_str();
    if !is_accepted_payment_reference(reference) {
        warn!("Rejected payment reference for {}", session.email);
        return Err(AppError::Validation(
            "Invalid Payment ID. Please check and try again.".to_string(),
        ));
    }

    let account = activate(&state.db, &session.email, PlanTier::Premium, reference).await?;

    Ok(Json(ActivateResponse {
        tier: PlanTier::Premium,
        account,
        message: "Payment verified! Premium access granted for 1 year.".to_string(),
    }))
}
