use std::fmt::Debug;

use log::{debug, trace};

use crate::{
    db_types::{NewTransaction, Transaction},
    traits::{MerchantManagement, TransactionApiError, TransactionManagement},
};

/// The `TransactionApi` is the authorization gate in front of transaction persistence.
///
/// A submitted transaction is either *self-owned* (the acting merchant equals the declared owner) or *child-owned*.
/// Self-owned transactions persist unconditionally. Child-owned transactions persist only if the declared owner has
/// been explicitly linked as an authorized parent of the acting merchant.
pub struct TransactionApi<B> {
    db: B,
}

impl<B: Debug> Debug for TransactionApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TransactionApi ({:?})", self.db)
    }
}

impl<B> TransactionApi<B>
where B: TransactionManagement + MerchantManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Stores a new transaction, gating child-owned submissions on an authorization edge.
    ///
    /// The authorization read and the insert are two separate storage operations. There is no delete operation for
    /// edges in the current scope, so the check-then-act window is latent only.
    pub async fn store_transaction(&self, transaction: NewTransaction) -> Result<Transaction, TransactionApiError> {
        if transaction.is_self_owned() {
            trace!("🔄️ Submission by merchant {} is self-owned. Persisting directly.", transaction.merchant_id);
            return self.db.insert_transaction(transaction).await;
        }
        let edge = transaction.owning_edge();
        let authorized = self.db.is_authorized_parent(&edge).await?;
        if !authorized {
            debug!(
                "🔄️ Merchant {} may not transact on behalf of merchant {}. Submission rejected.",
                edge.parent_merchant_id, edge.child_merchant_id
            );
            return Err(TransactionApiError::Unauthorized(edge));
        }
        trace!("🔄️ Edge [{edge}] is authorized. Persisting child-owned transaction.");
        self.db.insert_transaction(transaction).await
    }

    /// Overwrites an existing transaction in full. No re-authorization is performed; authorization is checked at
    /// creation time only.
    pub async fn update_transaction(&self, transaction: &Transaction) -> Result<(), TransactionApiError> {
        self.db.update_transaction(transaction).await
    }

    /// Fetches a transaction by id, or fails with [`TransactionApiError::TransactionNotFound`].
    pub async fn fetch_transaction(&self, id: i64) -> Result<Transaction, TransactionApiError> {
        self.db.fetch_transaction_by_id(id).await?.ok_or(TransactionApiError::TransactionNotFound(id))
    }
}
