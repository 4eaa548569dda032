//! # Database management and control.
//!
//! This module provides the interface contracts of the engine's database *backends*.
//!
//! ## Traits
//! * [`traits::UserManagement`] is the account directory: it maps a verified attribute (id, name or email) to a
//!   local account record, and maintains those records.
//! * [`traits::SalesManagement`] provides the read-only sales reporting queries.
//!
//! Backends (SQLite being the default) implement these traits; everything above this module is written against
//! the traits, never against a concrete backend.
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod traits;
