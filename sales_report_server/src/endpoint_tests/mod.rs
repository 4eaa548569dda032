//! Endpoint tests.
//!
//! These spin up the routes (and where relevant the bearer authorization gate) against mocked backends, so no
//! database or identity provider is needed.

mod gate;
mod helpers;
mod mocks;
mod sales;
