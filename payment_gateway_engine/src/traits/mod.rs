//! # Database management and control.
//!
//! This module defines the interface contracts that payment gateway database *backends* must fulfil.
//!
//! ## Merchants
//! The [`MerchantManagement`] trait covers the merchant side of the store: inserting merchants and their default
//! settings, recording parent/child authorization edges, and answering the authorization existence query that the
//! transaction workflow relies on.
//!
//! ## Transactions
//! The [`TransactionManagement`] trait covers transaction persistence: insert, full-row update and primary-key
//! lookup. It carries no authorization logic of its own; that decision lives in
//! [`TransactionApi`](crate::TransactionApi) so that it is enforced identically for every backend.
mod merchant_management;
mod transaction_management;

pub use merchant_management::{MerchantApiError, MerchantManagement};
pub use transaction_management::{TransactionApiError, TransactionManagement};
