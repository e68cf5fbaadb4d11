use chrono::{Days, Local, NaiveDate};
use sqlx::SqlitePool;
use tracing::info;

use crate::errors::AppError;
use crate::models::account::{PlanTier, UserAccount, EXPIRY_FORMAT};

/// Length of one paid period.
pub const PREMIUM_PERIOD_DAYS: u64 = 365;

/// Today's local calendar date. Expiry is compared at day granularity.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Derives the effective tier from a stored record.
///
/// No record, no expiry, an unparseable expiry, or an expiry on or before
/// `today` all resolve to `Basic`. Otherwise the stored label applies.
pub fn resolve_tier(account: Option<&UserAccount>, today: NaiveDate) -> PlanTier {
    let Some(account) = account else {
        return PlanTier::Basic;
    };
    match account.expiry_date() {
        Some(expiry) if expiry > today => PlanTier::from_label(&account.plan),
        _ => PlanTier::Basic,
    }
}

/// Returns the raw record for `email`, if one exists. Emails are matched exactly.
pub async fn find_account(pool: &SqlitePool, email: &str) -> Result<Option<UserAccount>, sqlx::Error> {
    sqlx::query_as::<_, UserAccount>(
        "SELECT id, email, plan, expiry, payment_id FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Effective tier for `email` right now.
pub async fn get_effective_tier(pool: &SqlitePool, email: &str) -> Result<PlanTier, sqlx::Error> {
    get_effective_tier_on(pool, email, today()).await
}

/// Effective tier for `email` as of `today`. Read-only.
pub async fn get_effective_tier_on(
    pool: &SqlitePool,
    email: &str,
    today: NaiveDate,
) -> Result<PlanTier, sqlx::Error> {
    if email.is_empty() {
        return Ok(PlanTier::Basic);
    }
    let account = find_account(pool, email).await?;
    Ok(resolve_tier(account.as_ref(), today))
}

/// Grants `plan` to `email` for one period starting now.
pub async fn activate(
    pool: &SqlitePool,
    email: &str,
    plan: PlanTier,
    payment_reference: &str,
) -> Result<UserAccount, AppError> {
    activate_on(pool, email, plan, payment_reference, today()).await
}

/// Upserts the record for `email` with `expiry = today + 365 days`.
///
/// An existing row has plan, expiry and payment reference overwritten; otherwise
/// a row is inserted. The write is committed before this returns.
pub async fn activate_on(
    pool: &SqlitePool,
    email: &str,
    plan: PlanTier,
    payment_reference: &str,
    today: NaiveDate,
) -> Result<UserAccount, AppError> {
    if email.is_empty() {
        return Err(AppError::Validation("email cannot be empty".to_string()));
    }

    let expiry = today
        .checked_add_days(Days::new(PREMIUM_PERIOD_DAYS))
        .ok_or_else(|| anyhow::anyhow!("expiry date out of range for {today}"))?;
    let expiry = expiry.format(EXPIRY_FORMAT).to_string();

    sqlx::query(
        r#"
        INSERT INTO users (email, plan, expiry, payment_id)
        VALUES (?, ?, ?, ?)
        ON CONFLICT(email) DO UPDATE SET
            plan = excluded.plan,
            expiry = excluded.expiry,
            payment_id = excluded.payment_id
        "#,
    )
    .bind(email)
    .bind(plan.as_str())
    .bind(&expiry)
    .bind(payment_reference)
    .execute(pool)
    .await?;

    info!("Activated {plan} for {email} until {expiry}");

    find_account(pool, email)
        .await?
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("account for {email} missing after upsert")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::temp_pool;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn insert_fixture(pool: &SqlitePool, email: &str, plan: &str, expiry: Option<&str>) {
        sqlx::query("INSERT INTO users (email, plan, expiry, payment_id) VALUES (?, ?, ?, 'pay_fixture')")
            .bind(email)
            .bind(plan)
            .bind(expiry)
            .execute(pool)
            .await
            .unwrap();
    }

    async fn row_count(pool: &SqlitePool, email: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_unknown_email_is_basic() {
        let (pool, _dir) = temp_pool().await;
        for email in ["nobody@x.com", "a@x.com", "someone.else@example.org"] {
            assert_eq!(get_effective_tier(&pool, email).await.unwrap(), PlanTier::Basic);
        }
    }

    #[tokio::test]
    async fn test_empty_email_is_basic() {
        let (pool, _dir) = temp_pool().await;
        assert_eq!(get_effective_tier(&pool, "").await.unwrap(), PlanTier::Basic);
    }

    #[tokio::test]
    async fn test_activate_grants_premium_immediately() {
        let (pool, _dir) = temp_pool().await;
        activate(&pool, "fit@x.com", PlanTier::Premium, "pay_abc")
            .await
            .unwrap();
        assert_eq!(
            get_effective_tier(&pool, "fit@x.com").await.unwrap(),
            PlanTier::Premium
        );
    }

    #[tokio::test]
    async fn test_past_expiry_is_basic() {
        let (pool, _dir) = temp_pool().await;
        let today = date(2026, 10, 17);
        insert_fixture(&pool, "lapsed@x.com", "Premium", Some("2026-10-16")).await;

        assert_eq!(
            get_effective_tier_on(&pool, "lapsed@x.com", today).await.unwrap(),
            PlanTier::Basic
        );
    }

    #[tokio::test]
    async fn test_expiry_day_itself_is_basic() {
        let (pool, _dir) = temp_pool().await;
        insert_fixture(&pool, "edge@x.com", "Premium", Some("2026-10-17")).await;

        assert_eq!(
            get_effective_tier_on(&pool, "edge@x.com", date(2026, 10, 17)).await.unwrap(),
            PlanTier::Basic
        );
        assert_eq!(
            get_effective_tier_on(&pool, "edge@x.com", date(2026, 10, 16)).await.unwrap(),
            PlanTier::Premium
        );
    }

    #[tokio::test]
    async fn test_absent_or_malformed_expiry_is_basic() {
        let (pool, _dir) = temp_pool().await;
        let today = date(2026, 10, 17);
        insert_fixture(&pool, "noexpiry@x.com", "Premium", None).await;
        insert_fixture(&pool, "garbage@x.com", "Premium", Some("next year")).await;

        assert_eq!(
            get_effective_tier_on(&pool, "noexpiry@x.com", today).await.unwrap(),
            PlanTier::Basic
        );
        assert_eq!(
            get_effective_tier_on(&pool, "garbage@x.com", today).await.unwrap(),
            PlanTier::Basic
        );
    }

    #[tokio::test]
    async fn test_email_match_is_case_sensitive() {
        let (pool, _dir) = temp_pool().await;
        activate(&pool, "Case@X.com", PlanTier::Premium, "pay_1").await.unwrap();

        assert_eq!(get_effective_tier(&pool, "Case@X.com").await.unwrap(), PlanTier::Premium);
        assert_eq!(get_effective_tier(&pool, "case@x.com").await.unwrap(), PlanTier::Basic);
    }

    #[tokio::test]
    async fn test_activate_rejects_empty_email() {
        let (pool, _dir) = temp_pool().await;
        let err = activate(&pool, "", PlanTier::Premium, "pay_1").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_reactivation_recomputes_expiry_from_call_date() {
        let (pool, _dir) = temp_pool().await;
        let first_day = date(2026, 1, 1);
        let second_day = date(2026, 1, 11);

        let first = activate_on(&pool, "re@x.com", PlanTier::Premium, "pay_1", first_day)
            .await
            .unwrap();
        let second = activate_on(&pool, "re@x.com", PlanTier::Premium, "pay_1", second_day)
            .await
            .unwrap();

        assert_eq!(first.expiry.as_deref(), Some("2027-01-01"));
        assert_eq!(second.expiry.as_deref(), Some("2027-01-11"));
        assert_eq!(first.id, second.id);
        assert_eq!(row_count(&pool, "re@x.com").await, 1);
    }

    #[tokio::test]
    async fn test_activation_revives_lapsed_account() {
        let (pool, _dir) = temp_pool().await;
        let today = date(2026, 10, 17);
        insert_fixture(&pool, "back@x.com", "Premium", Some("2025-01-01")).await;
        assert_eq!(
            get_effective_tier_on(&pool, "back@x.com", today).await.unwrap(),
            PlanTier::Basic
        );

        activate_on(&pool, "back@x.com", PlanTier::Premium, "pay_new", today)
            .await
            .unwrap();

        assert_eq!(
            get_effective_tier_on(&pool, "back@x.com", today).await.unwrap(),
            PlanTier::Premium
        );
        assert_eq!(row_count(&pool, "back@x.com").await, 1);
    }

    /// fresh store → Basic → activate pay_1 → Premium → activate pay_2 → one row, pay_2.
    #[tokio::test]
    async fn test_activation_scenario() {
        let (pool, _dir) = temp_pool().await;
        let email = "a@x.com";
        let day_one = date(2026, 10, 17);
        let day_two = date(2026, 10, 20);

        assert_eq!(
            get_effective_tier_on(&pool, email, day_one).await.unwrap(),
            PlanTier::Basic
        );

        let account = activate_on(&pool, email, PlanTier::Premium, "pay_1", day_one)
            .await
            .unwrap();
        assert_eq!(
            get_effective_tier_on(&pool, email, day_one).await.unwrap(),
            PlanTier::Premium
        );
        assert_eq!(account.expiry_date(), Some(date(2027, 10, 17)));

        activate_on(&pool, email, PlanTier::Premium, "pay_2", day_two)
            .await
            .unwrap();

        assert_eq!(row_count(&pool, email).await, 1);
        let stored = find_account(&pool, email).await.unwrap().unwrap();
        assert_eq!(stored.payment_reference.as_deref(), Some("pay_2"));
        assert_eq!(stored.expiry_date(), Some(date(2027, 10, 20)));
        assert_eq!(stored.plan, "Premium");
    }

    #[test]
    fn test_resolve_tier_without_record_is_basic() {
        assert_eq!(resolve_tier(None, date(2026, 10, 17)), PlanTier::Basic);
    }

    #[test]
    fn test_resolve_tier_ignores_stale_label() {
        let account = UserAccount {
            id: 1,
            email: "stale@x.com".to_string(),
            plan: "Premium".to_string(),
            expiry: Some("2020-01-01".to_string()),
            payment_reference: None,
        };
        assert_eq!(resolve_tier(Some(&account), date(2026, 10, 17)), PlanTier::Basic);
    }
}
