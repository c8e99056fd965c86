use std::fmt::Debug;

use log::{debug, warn};

use crate::{
    db_types::{Merchant, MerchantGroup, MerchantSettings, NewMerchant},
    traits::{MerchantApiError, MerchantManagement},
};

/// The `MerchantApi` orchestrates merchant registration and group linking.
pub struct MerchantApi<B> {
    db: B,
}

impl<B: Debug> Debug for MerchantApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MerchantApi ({:?})", self.db)
    }
}

impl<B> MerchantApi<B>
where B: MerchantManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Registers a new merchant and writes its default settings row.
    ///
    /// The two writes are sequential and not atomic. If the settings insert fails after the merchant row has been
    /// committed, the merchant row is left in place and the error is surfaced to the caller (at-least-inserted
    /// semantics). Callers must not assume that a failed registration wrote nothing.
    pub async fn register_merchant(&self, merchant: NewMerchant) -> Result<Merchant, MerchantApiError> {
        let merchant = self.db.insert_merchant(merchant).await?;
        debug!("🔄️ {merchant} registered");
        let settings = self.db.init_settings(merchant.id).await.map_err(|e| {
            warn!("🔄️ {merchant} was created, but its default settings could not be written. {e}");
            e
        })?;
        debug!("🔄️ Default settings ({}/{}) bound to {merchant}", settings.payment_type, settings.payment_name);
        Ok(merchant)
    }

    /// Records a parent/child authorization edge.
    ///
    /// No authorization pre-check is performed here. The edge is only consulted later, when a child-owned
    /// transaction is submitted.
    pub async fn link_merchants(&self, group: MerchantGroup) -> Result<(), MerchantApiError> {
        self.db.link_child(group).await?;
        debug!("🔄️ Merchant {} linked as child of {}", group.child_merchant_id, group.parent_merchant_id);
        Ok(())
    }

    /// Fetches the settings row for the given merchant, if any.
    pub async fn settings_for_merchant(&self, merchant_id: i64) -> Result<Option<MerchantSettings>, MerchantApiError> {
        self.db.fetch_settings(merchant_id).await
    }
}
