//! The public workflows of the payment gateway engine.
//!
//! The APIs in this module are thin orchestration layers over a backend implementing the [`crate::traits`] contracts.
//! They hold the only non-trivial decision in the system: whether a transaction may be persisted at all.
mod merchant_api;
mod transaction_api;

pub use merchant_api::MerchantApi;
pub use transaction_api::TransactionApi;
