//! # Sales report engine public API
//!
//! The `sre_api` module exposes the programmatic API of the engine. The pattern for using the APIs is the same
//! everywhere: an API instance is created by supplying a database backend that implements the backend traits the
//! API requires.
//!
//! ```rust,ignore
//! use sales_report_engine::{SqliteDatabase, UserApi};
//! let db = SqliteDatabase::new_with_url(...).await?;
//! // SqliteDatabase implements UserManagement
//! let api = UserApi::new(db);
//! let user = api.user_by_email("alice@example.com").await?;
//! ```
pub mod sales_api;
pub mod users_api;
