//! Role name constants.
//!
//! Roles are stored as plain text on the `users` row. The portfolio only
//! distinguishes the admin operator from everyone else.

/// The admin role: full access to content management and uploads.
pub const ROLE_ADMIN: &str = "admin";
