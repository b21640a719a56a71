//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT token generation and validation.
//! - [`cookie`] -- `auth-token` cookie construction and parsing.

pub mod cookie;
pub mod jwt;
pub mod password;
