//! # User Repository
//!
//! Storage abstraction over the `users` table. `PgUserRepository` is the
//! production backend; `InMemoryUserRepository` backs the test suite with
//! the same row-count semantics.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{User, UserDraft, UserError};

pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;

/// Capability set required of a user storage backend
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every row; an empty table is reported as `NotFound`
    async fn get_all(&self) -> Result<Vec<User>, UserError>;

    /// Single-row lookup by identifier; zero rows is `NotFound`
    async fn get_by_id(&self, id: Uuid) -> Result<User, UserError>;

    /// Insert one row with a server-assigned id and timestamp
    async fn create(&self, draft: UserDraft) -> Result<Uuid, UserError>;

    /// Update name, email, and age in place; id and created are untouched
    async fn update(&self, id: Uuid, draft: UserDraft) -> Result<User, UserError>;

    /// Remove one row; anything but exactly one affected row is `Internal`
    async fn delete(&self, id: Uuid) -> Result<(), UserError>;
}
