//! # Sales report server
//! This crate hosts the HTTP surface of the sales report service. It is responsible for:
//! Registering and signing in users against the hosted identity provider.
//! Guarding the API behind the bearer authorization gate, with the public auth routes exempted.
//! Serving the read-only sales reports out of the database.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/api/auth/*`: Sign up, confirm sign up, log in and sign out.
//! * `/api/sales`: The sales reports. Requires a bearer token.

pub mod auth;
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod integrations;
pub mod middleware;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
