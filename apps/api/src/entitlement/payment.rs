//! Payment confirmation.
//!
//! The only proof of payment is the transaction ID the user pastes in after
//! paying on the hosted checkout page. It is accepted on its prefix alone and
//! is NOT verified with the payment processor, so a forged ID that starts with
//! `pay_` activates Premium. Real verification needs the processor's payments
//! API or a signed webhook.

/// Prefix of Razorpay payment IDs.
pub const PAYMENT_REFERENCE_PREFIX: &str = "pay_";

/// Price shown on the upgrade screen.
pub const PREMIUM_PRICE_INR: u32 = 299;

/// Features unlocked by Premium, in display order.
pub const PREMIUM_FEATURES: &[&str] = &[
    "Advanced Workout Plans",
    "Indian Diet Generator",
    "Calorie Tracker",
    "Smart Chatbot Assistant",
];

pub fn is_accepted_payment_reference(reference: &str) -> bool {
    reference.starts_with(PAYMENT_REFERENCE_PREFIX)
}
