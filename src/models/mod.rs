//! # Data Model
//!
//! The stored `User` entity, the input-only `UserDraft` DTO, and the
//! closed error enumeration shared by every layer.

pub mod errors;
pub mod user;

pub use errors::UserError;
pub use user::{User, UserDraft};
