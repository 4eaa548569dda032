//! Adapters binding external services onto the traits the server consumes.

pub mod cognito;
