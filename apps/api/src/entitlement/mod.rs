//! Entitlements: who is Premium, until when, and how a user becomes Premium.
//!
//! The stored plan label is never trusted on its own. Every read derives the
//! effective tier from the expiry date, so lapsed subscriptions need no sweep.

pub mod handlers;
pub mod payment;
pub mod store;
