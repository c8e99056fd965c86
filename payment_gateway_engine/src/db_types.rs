use std::fmt::Display;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The settings row created for every new merchant. Not configurable in the current scope.
pub const DEFAULT_SETTINGS_COLOR: &str = "RED";
pub const DEFAULT_SETTINGS_PAYMENT_TYPE: &str = "CARD";
pub const DEFAULT_SETTINGS_PAYMENT_NAME: &str = "VISA";

//--------------------------------------       Merchant        --------------------------------------------------------

/// A registered merchant. The id is assigned by the database on insert and the record is immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub id: i64,
    pub name: String,
}

impl Display for Merchant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Merchant #{} ({})", self.id, self.name)
    }
}

/// A merchant registration request, i.e. a [`Merchant`] before the database has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMerchant {
    pub name: String,
}

impl<S: Into<String>> From<S> for NewMerchant {
    fn from(name: S) -> Self {
        Self { name: name.into() }
    }
}

//--------------------------------------     MerchantGroup     --------------------------------------------------------

/// A directed authorization edge. The parent merchant is authorized to transact on behalf of the child merchant.
///
/// A parent may have any number of children. Duplicate edges are permitted and no cycle prevention is carried out;
/// the edge is only ever consumed as an existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MerchantGroup {
    pub parent_merchant_id: i64,
    pub child_merchant_id: i64,
}

impl Display for MerchantGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.parent_merchant_id, self.child_merchant_id)
    }
}

//--------------------------------------    MerchantSettings   --------------------------------------------------------

/// The per-merchant settings row. One row is written alongside every merchant registration, carrying the fixed
/// defaults. There is no API for changing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MerchantSettings {
    pub merchant_id: i64,
    pub color: String,
    pub payment_type: String,
    pub payment_name: String,
}

impl MerchantSettings {
    /// The default settings bound to the given merchant.
    pub fn default_for(merchant_id: i64) -> Self {
        Self {
            merchant_id,
            color: DEFAULT_SETTINGS_COLOR.to_string(),
            payment_type: DEFAULT_SETTINGS_PAYMENT_TYPE.to_string(),
            payment_name: DEFAULT_SETTINGS_PAYMENT_NAME.to_string(),
        }
    }
}

//--------------------------------------      Transaction      --------------------------------------------------------

/// A persisted transaction.
///
/// `merchant_id` is the acting merchant and `parent_merchant_id` the declared owning merchant. The two are equal for
/// a merchant acting on its own behalf. The status flag is stored as an INTEGER (0/1) in the database; any non-zero
/// value decodes to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub merchant_id: i64,
    pub parent_merchant_id: i64,
    pub setting_id: i64,
    pub status: bool,
}

impl Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Transaction #{} (merchant {}, parent {})", self.id, self.merchant_id, self.parent_merchant_id)
    }
}

/// A transaction submission, i.e. a [`Transaction`] before the database has assigned it an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub merchant_id: i64,
    pub parent_merchant_id: i64,
    pub setting_id: i64,
    pub status: bool,
}

impl NewTransaction {
    pub fn is_self_owned(&self) -> bool {
        self.merchant_id == self.parent_merchant_id
    }

    /// The authorization edge this transaction relies on: declared owner over acting merchant.
    pub fn owning_edge(&self) -> MerchantGroup {
        MerchantGroup { parent_merchant_id: self.parent_merchant_id, child_merchant_id: self.merchant_id }
    }
}
