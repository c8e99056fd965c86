use log::debug;
use sqlx::SqliteConnection;

use crate::{
    db_types::{Merchant, MerchantGroup, MerchantSettings, NewMerchant},
    traits::MerchantApiError,
};

/// Inserts a new merchant row using the given connection. The database assigns the id.
pub async fn insert_merchant(
    merchant: NewMerchant,
    conn: &mut SqliteConnection,
) -> Result<Merchant, MerchantApiError> {
    let merchant: Merchant = sqlx::query_as("INSERT INTO merchants (name) VALUES ($1) RETURNING *")
        .bind(merchant.name)
        .fetch_one(conn)
        .await?;
    debug!("🗃️ Merchant [{}] inserted with id {}", merchant.name, merchant.id);
    Ok(merchant)
}

/// Writes the default settings row for the given merchant. A plain insert; calling it twice writes two rows.
pub async fn init_settings(merchant_id: i64, conn: &mut SqliteConnection) -> Result<MerchantSettings, MerchantApiError> {
    let defaults = MerchantSettings::default_for(merchant_id);
    let settings = sqlx::query_as(
        r#"
            INSERT INTO settings (
                merchant_id,
                color,
                payment_type,
                payment_name
            ) VALUES ($1, $2, $3, $4)
            RETURNING *;
        "#,
    )
    .bind(defaults.merchant_id)
    .bind(defaults.color)
    .bind(defaults.payment_type)
    .bind(defaults.payment_name)
    .fetch_one(conn)
    .await?;
    debug!("🗃️ Default settings written for merchant {merchant_id}");
    Ok(settings)
}

/// Returns the settings row for the given merchant, if one has been written.
pub async fn fetch_settings(
    merchant_id: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<MerchantSettings>, MerchantApiError> {
    let settings = sqlx::query_as("SELECT * FROM settings WHERE merchant_id = $1 LIMIT 1")
        .bind(merchant_id)
        .fetch_optional(conn)
        .await?;
    Ok(settings)
}

/// Inserts a parent/child authorization edge. There is no duplicate check; the edge is only ever consumed as an
/// existence query.
pub async fn link_child(group: MerchantGroup, conn: &mut SqliteConnection) -> Result<(), MerchantApiError> {
    sqlx::query("INSERT INTO merchant_groups (parent_merchant_id, child_merchant_id) VALUES ($1, $2)")
        .bind(group.parent_merchant_id)
        .bind(group.child_merchant_id)
        .execute(conn)
        .await?;
    debug!("🗃️ Authorization edge [{group}] recorded");
    Ok(())
}

/// Existence check for the exact edge `{parent_merchant_id, child_merchant_id}`. Pure read, no side effects.
pub async fn is_authorized_parent(
    group: &MerchantGroup,
    conn: &mut SqliteConnection,
) -> Result<bool, MerchantApiError> {
    let authorized: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM merchant_groups WHERE parent_merchant_id = $1 AND child_merchant_id = $2 LIMIT \
         1) as authorized",
    )
    .bind(group.parent_merchant_id)
    .bind(group.child_merchant_id)
    .fetch_one(conn)
    .await?;
    Ok(authorized)
}
