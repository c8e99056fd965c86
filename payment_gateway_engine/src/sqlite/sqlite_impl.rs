//! `SqliteDatabase` is a concrete implementation of a payment gateway backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements all the traits defined in the [`crate::traits`]
//! module.
use std::fmt::Debug;

use log::trace;
use sqlx::SqlitePool;

use super::db::{db_url, merchants, new_pool, transactions};
use crate::{
    db_types::{Merchant, MerchantGroup, MerchantSettings, NewMerchant, NewTransaction, Transaction},
    traits::{MerchantApiError, MerchantManagement, TransactionApiError, TransactionManagement},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new database API object, reading the URL from `PGW_DATABASE_URL` or falling back to the default.
    pub async fn new(max_connections: u32) -> Result<Self, sqlx::Error> {
        let url = db_url();
        SqliteDatabase::new_with_url(url.as_str(), max_connections).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        trace!("Creating new database connection pool with url {url}");
        let pool = new_pool(url, max_connections).await?;
        let url = url.to_string();
        Ok(Self { url, pool })
    }

    /// The URL of the database.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&mut self) {
        self.pool.close().await;
    }
}

impl MerchantManagement for SqliteDatabase {
    async fn insert_merchant(&self, merchant: NewMerchant) -> Result<Merchant, MerchantApiError> {
        let mut conn = self.pool.acquire().await?;
        merchants::insert_merchant(merchant, &mut conn).await
    }

    async fn init_settings(&self, merchant_id: i64) -> Result<MerchantSettings, MerchantApiError> {
        let mut conn = self.pool.acquire().await?;
        merchants::init_settings(merchant_id, &mut conn).await
    }

    async fn fetch_settings(&self, merchant_id: i64) -> Result<Option<MerchantSettings>, MerchantApiError> {
        let mut conn = self.pool.acquire().await?;
        merchants::fetch_settings(merchant_id, &mut conn).await
    }

    async fn link_child(&self, group: MerchantGroup) -> Result<(), MerchantApiError> {
        let mut conn = self.pool.acquire().await?;
        merchants::link_child(group, &mut conn).await
    }

    async fn is_authorized_parent(&self, group: &MerchantGroup) -> Result<bool, MerchantApiError> {
        let mut conn = self.pool.acquire().await?;
        merchants::is_authorized_parent(group, &mut conn).await
    }
}

impl TransactionManagement for SqliteDatabase {
    async fn fetch_transaction_by_id(&self, id: i64) -> Result<Option<Transaction>, TransactionApiError> {
        let mut conn = self.pool.acquire().await?;
        transactions::fetch_transaction_by_id(id, &mut conn).await
    }

    async fn insert_transaction(&self, transaction: NewTransaction) -> Result<Transaction, TransactionApiError> {
        let mut conn = self.pool.acquire().await?;
        transactions::insert_transaction(transaction, &mut conn).await
    }

    async fn update_transaction(&self, transaction: &Transaction) -> Result<(), TransactionApiError> {
        let mut conn = self.pool.acquire().await?;
        transactions::update_transaction(transaction, &mut conn).await
    }
}
