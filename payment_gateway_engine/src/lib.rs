//! Payment Gateway Engine
//!
//! The engine holds the core logic of the payment gateway: registering merchants (together with their default
//! settings), linking merchants into parent/child authorization groups, and deciding whether a transaction may be
//! persisted based on those groups. It is delivery-agnostic; the HTTP server crate is just one consumer.
//!
//! The library is divided into two main sections:
//! 1. Database management and control ([`mod@sqlite`]). SQLite is the only supported backend at present. You should
//!    never need to access the database directly. Instead, use the public API provided by the engine. The exception is
//!    the data types used in the database. These are defined in the [`db_types`] module and are public.
//! 2. The engine public API ([`MerchantApi`] and [`TransactionApi`]). These provide the public-facing workflows of the
//!    gateway. Backends need to implement the traits in [`traits`] in order to drive these APIs, which makes it
//!    trivial to substitute an in-memory fake or a mock when testing consumers.
pub mod db_types;
mod pge_api;
pub mod traits;

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub mod test_utils;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;

pub use pge_api::{MerchantApi, TransactionApi};
pub use traits::{MerchantApiError, MerchantManagement, TransactionApiError, TransactionManagement};
