//! Contact form messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::validation::{require_all, validate_email};

/// A stored contact form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to insert a contact message; `read` always starts false
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body of `POST /api/contact`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactRequest {
    /// All three fields are required and the email must look like one
    pub fn into_new(self) -> Result<NewContactMessage, SharedError> {
        require_all(&[
            ("name", self.name.as_deref()),
            ("email", self.email.as_deref()),
            ("message", self.message.as_deref()),
        ])?;

        let email = self.email.unwrap_or_default().trim().to_string();
        validate_email(&email)?;

        Ok(NewContactMessage {
            name: self.name.unwrap_or_default().trim().to_string(),
            email,
            message: self.message.unwrap_or_default(),
        })
    }
}
