use thiserror::Error;

use crate::db_types::{Merchant, MerchantGroup, MerchantSettings, NewMerchant};

#[derive(Debug, Clone, Error)]
pub enum MerchantApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for MerchantApiError {
    fn from(e: sqlx::Error) -> Self {
        Self::DatabaseError(e.to_string())
    }
}

/// The merchant side of the gateway store.
///
/// Implementations persist merchants, their default settings and the parent/child authorization edges, and answer
/// the authorization existence query. Every storage failure surfaces as
/// [`MerchantApiError::DatabaseError`]; the store never retries.
#[allow(async_fn_in_trait)]
pub trait MerchantManagement {
    /// Inserts a new merchant and returns the stored record with its assigned id.
    async fn insert_merchant(&self, merchant: NewMerchant) -> Result<Merchant, MerchantApiError>;

    /// Inserts the default settings row for the given merchant and returns it.
    ///
    /// This is a plain insert. It does not check that the merchant exists, and calling it twice writes two rows.
    async fn init_settings(&self, merchant_id: i64) -> Result<MerchantSettings, MerchantApiError>;

    /// Fetches the settings row for the given merchant, or `None` if no settings have been written.
    async fn fetch_settings(&self, merchant_id: i64) -> Result<Option<MerchantSettings>, MerchantApiError>;

    /// Records a parent/child authorization edge. Duplicate edges are permitted.
    async fn link_child(&self, group: MerchantGroup) -> Result<(), MerchantApiError>;

    /// Returns `true` iff an edge matching exactly `{parent_merchant_id, child_merchant_id}` has been recorded.
    /// This is a pure read with no side effects.
    async fn is_authorized_parent(&self, group: &MerchantGroup) -> Result<bool, MerchantApiError>;
}
