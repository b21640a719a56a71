//! Shared domain types for the portfolio CMS backend.
//!
//! Everything here is dependency-light so it can be used from the database
//! layer, the storage layer, the API server, and the CLI binaries alike.

pub mod error;
pub mod roles;
pub mod types;
pub mod upload;
