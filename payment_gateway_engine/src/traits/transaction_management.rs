use thiserror::Error;

use crate::{
    db_types::{MerchantGroup, NewTransaction, Transaction},
    traits::MerchantApiError,
};

#[derive(Debug, Clone, Error)]
pub enum TransactionApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Merchant {} is not an authorized parent of merchant {}", .0.parent_merchant_id, .0.child_merchant_id)]
    Unauthorized(MerchantGroup),
    #[error("Transaction {0} does not exist")]
    TransactionNotFound(i64),
}

impl From<sqlx::Error> for TransactionApiError {
    fn from(e: sqlx::Error) -> Self {
        Self::DatabaseError(e.to_string())
    }
}

impl From<MerchantApiError> for TransactionApiError {
    fn from(e: MerchantApiError) -> Self {
        match e {
            MerchantApiError::DatabaseError(e) => Self::DatabaseError(e),
        }
    }
}

/// The transaction side of the gateway store: persistence only, no authorization.
#[allow(async_fn_in_trait)]
pub trait TransactionManagement {
    /// Single-row lookup by primary key. Returns `None` when no transaction with the given id exists.
    async fn fetch_transaction_by_id(&self, id: i64) -> Result<Option<Transaction>, TransactionApiError>;

    /// Inserts a transaction and returns the stored record with its assigned id.
    async fn insert_transaction(&self, transaction: NewTransaction) -> Result<Transaction, TransactionApiError>;

    /// Full-row overwrite of merchant, parent, setting and status by id.
    ///
    /// Updating an id that does not exist is not an error; zero affected rows count as success.
    async fn update_transaction(&self, transaction: &Transaction) -> Result<(), TransactionApiError>;
}
