//! Sales Report Engine
//!
//! The engine is the database backend for the sales report server. It owns the account directory (the local user
//! records that verified identities resolve against) and the read-only sales reporting queries.
//!
//! The library is divided into two main sections:
//! 1. Database management and control ([`mod@db`]). SQLite is the default backend. You should never need to access
//!    the database directly; use the public API instead. The exception is the data types used in the database,
//!    which are defined in the `db_types` module and are public.
//! 2. The engine public API ([`mod@sre_api`]). Thin wrappers (`UserApi`, `SalesApi`) over the backend traits, so
//!    that the server can be written (and tested) against any backend that implements them.
mod db;

pub mod db_types;
mod sre_api;

#[cfg(feature = "sqlite")]
pub use db::sqlite::{db::db_url, SqliteDatabase};
pub use db::traits;
pub use db::traits::{SalesApiError, SalesManagement, UserApiError, UserManagement};
pub use sre_api::{sales_api::SalesApi, users_api::UserApi};
