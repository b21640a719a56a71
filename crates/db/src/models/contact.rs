//! Contact message model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the public contact form. Name, email, and message are required;
/// the email must be well-formed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactMessage {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub subject: Option<String>,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// DTO for marking a message read/unread.
#[derive(Debug, Clone, Deserialize)]
pub struct SetMessageRead {
    pub is_read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> CreateContactMessage {
        CreateContactMessage {
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            subject: None,
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_valid_message_passes() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut dto = base();
        dto.name = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut dto = base();
        dto.email = "not-an-email".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_empty_message_rejected() {
        let mut dto = base();
        dto.message = String::new();
        assert!(dto.validate().is_err());
    }
}
