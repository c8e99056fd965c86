use log::{debug, trace};
use sqlx::SqliteConnection;

use crate::{
    db_types::{NewTransaction, Transaction},
    traits::TransactionApiError,
};

/// Single-row lookup by primary key. The status column is an INTEGER; sqlx decodes any non-zero value to `true`.
pub async fn fetch_transaction_by_id(
    id: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<Transaction>, TransactionApiError> {
    let transaction = sqlx::query_as(
        "SELECT id, merchant_id, parent_merchant_id, setting_id, status FROM transactions WHERE id = $1 LIMIT 1",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    trace!("🗃️ Result of fetch_transaction_by_id({id}): {transaction:?}");
    Ok(transaction)
}

/// Inserts a new transaction row using the given connection. The database assigns the id, and the status flag is
/// stored as 0/1.
pub async fn insert_transaction(
    transaction: NewTransaction,
    conn: &mut SqliteConnection,
) -> Result<Transaction, TransactionApiError> {
    let transaction: Transaction = sqlx::query_as(
        r#"
            INSERT INTO transactions (
                merchant_id,
                parent_merchant_id,
                setting_id,
                status
            ) VALUES ($1, $2, $3, $4)
            RETURNING *;
        "#,
    )
    .bind(transaction.merchant_id)
    .bind(transaction.parent_merchant_id)
    .bind(transaction.setting_id)
    .bind(transaction.status)
    .fetch_one(conn)
    .await?;
    debug!("🗃️ {transaction} inserted");
    Ok(transaction)
}

/// Full-row overwrite by id. Zero affected rows is not an error; the contract is silent success on a missing id.
pub async fn update_transaction(
    transaction: &Transaction,
    conn: &mut SqliteConnection,
) -> Result<(), TransactionApiError> {
    let result = sqlx::query(
        "UPDATE transactions SET merchant_id = $1, parent_merchant_id = $2, setting_id = $3, status = $4 WHERE id = \
         $5",
    )
    .bind(transaction.merchant_id)
    .bind(transaction.parent_merchant_id)
    .bind(transaction.setting_id)
    .bind(transaction.status)
    .bind(transaction.id)
    .execute(conn)
    .await?;
    if result.rows_affected() == 0 {
        debug!("🗃️ Update of transaction {} matched no rows", transaction.id);
    }
    Ok(())
}
