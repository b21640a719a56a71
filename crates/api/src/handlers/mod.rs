//! HTTP request handlers, one module per resource.

pub mod about;
pub mod auth;
pub mod certification;
pub mod contact;
pub mod education;
pub mod experience;
pub mod gallery;
pub mod homepage;
pub mod settings;
pub mod setup;
pub mod skills;
pub mod upload;
