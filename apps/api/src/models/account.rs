use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Storage format of the `expiry` column.
pub const EXPIRY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanTier {
    Basic,
    Premium,
}

impl PlanTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Basic => "Basic",
            PlanTier::Premium => "Premium",
        }
    }

    /// Parses a stored plan label. Anything unrecognised (including the legacy
    /// `free` default) is `Basic`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Premium" => PlanTier::Premium,
            _ => PlanTier::Basic,
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the `users` table.
///
/// `plan` is whatever was written at the last activation and goes stale once
/// `expiry` passes. Use `entitlement::store::resolve_tier` for the effective tier.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserAccount {
    pub id: i64,
    pub email: String,
    pub plan: String,
    pub expiry: Option<String>,
    #[sqlx(rename = "payment_id")]
    pub payment_reference: Option<String>,
}

impl UserAccount {
    /// Parsed expiry date. A malformed stored value is treated as no expiry.
    /// chrono skips whitespace before numeric fields, so a padded value is
    /// rejected up front.
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry
            .as_deref()
            .filter(|s| !s.starts_with(char::is_whitespace))
            .and_then(|s| NaiveDate::parse_from_str(s, EXPIRY_FORMAT).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(expiry: Option<&str>) -> UserAccount {
        UserAccount {
            id: 1,
            email: "a@x.com".to_string(),
            plan: "Premium".to_string(),
            expiry: expiry.map(str::to_string),
            payment_reference: Some("pay_1".to_string()),
        }
    }

    #[test]
    fn test_expiry_date_parses_iso_date() {
        let acc = account(Some("2027-01-31"));
        assert_eq!(acc.expiry_date(), NaiveDate::from_ymd_opt(2027, 1, 31));
    }

    #[test]
    fn test_malformed_expiry_is_none() {
        assert_eq!(account(Some("31/01/2027")).expiry_date(), None);
        assert_eq!(account(Some("")).expiry_date(), None);
        assert_eq!(account(Some(" 2027-01-01")).expiry_date(), None);
        assert_eq!(account(Some("2027-01-01 ")).expiry_date(), None);
        assert_eq!(account(None).expiry_date(), None);
    }

    #[test]
    fn test_unknown_plan_label_is_basic() {
        assert_eq!(PlanTier::from_label("Premium"), PlanTier::Premium);
        assert_eq!(PlanTier::from_label("free"), PlanTier::Basic);
        assert_eq!(PlanTier::from_label("premium"), PlanTier::Basic);
    }
}
