//! User entity and input DTO
//!
//! `UserDraft` is the wire-format input shape for create/update; `User` is
//! the stored record with the server-assigned identifier and creation
//! timestamp. The draft carries its own validation: required-field rules
//! first, then the email pattern.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::UserError;

// ASCII-only \w: addresses are plain [0-9A-Za-z_] labels on the wire
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^[\w\-.]+@([\w\-]+\.)+[\w\-]{2,4}$")
        .unicode(false)
        .build()
        .expect("email pattern")
});

/// Input shape for create and update requests
///
/// Lacks identifier and timestamp; those are server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDraft {
    #[serde(rename = "Firstname")]
    pub firstname: String,

    #[serde(rename = "Lastname")]
    pub lastname: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Age")]
    pub age: u32,
}

impl UserDraft {
    /// Validate required fields, then the email pattern
    ///
    /// Both checks run independently of the repository layer; a draft that
    /// fails here never reaches persistence.
    pub fn validate(&self) -> Result<(), UserError> {
        if self.firstname.trim().is_empty() {
            return Err(UserError::MissingField("Firstname"));
        }
        if self.lastname.trim().is_empty() {
            return Err(UserError::MissingField("Lastname"));
        }
        if self.email.trim().is_empty() {
            return Err(UserError::MissingField("Email"));
        }
        if !EMAIL_PATTERN.is_match(&self.email) {
            return Err(UserError::InvalidEmail);
        }
        // The age column is a signed 32-bit INTEGER
        if self.age > i32::MAX as u32 {
            return Err(UserError::BadParam);
        }
        Ok(())
    }
}

/// Stored user record
///
/// `id` is immutable and unique; `created` is set exactly once, at insert,
/// and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "ID")]
    pub id: Uuid,

    #[serde(rename = "Firstname")]
    pub firstname: String,

    #[serde(rename = "Lastname")]
    pub lastname: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Age")]
    pub age: u32,

    #[serde(rename = "Created")]
    pub created: DateTime<Utc>,
}

impl User {
    /// Promote a draft into a full entity, assigning id and timestamp
    pub fn from_draft(draft: UserDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            firstname: draft.firstname,
            lastname: draft.lastname,
            email: draft.email,
            age: draft.age,
            created: Utc::now(),
        }
    }
}
