//! Suit Store Engine
//!
//! The Suit Store Engine holds the storage logic for the Suit Store Gateway: the product catalog, the login
//! records, and the persisted order rows. It is HTTP-framework agnostic.
//!
//! The library is divided into two main sections:
//! 1. Database management and control ([`mod@sqlite`]). SQLite is the supported backend. You should never need to
//!    access the database directly. Instead, use the public API provided by the engine. The exception is the data
//!    types used in the database. These are defined in the `db_types` module and are public.
//! 2. The engine public API ([`mod@store_api`]). This provides the public-facing functionality of the engine:
//!    catalog queries, account registration and authentication, and order recording. Specific backends need to
//!    implement the traits in the [`mod@traits`] module in order to act as a backend for the Suit Store Server.
pub mod db_types;
pub mod helpers;
mod store_api;
pub mod traits;

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;
pub use store_api::{AccountApi, AccountError, CatalogApi, OrderApi};
pub use traits::{CatalogManagement, OrderManagement, UserManagement};
