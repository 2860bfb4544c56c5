//! In-memory repository for testing
//!
//! Mirrors the PostgreSQL backend's semantics exactly: an empty store is
//! `NotFound` on list, and update/delete of a missing id surface the same
//! row-count `Internal` error the SQL layer produces.

use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use super::UserRepository;
use crate::models::{User, UserDraft, UserError};

/// User repository backed by a plain vector
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, UserError> {
        let users = self
            .users
            .read()
            .map_err(|_| UserError::Internal("lock poisoned".to_string()))?;
        if users.is_empty() {
            return Err(UserError::NotFound);
        }
        Ok(users.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<User, UserError> {
        let users = self
            .users
            .read()
            .map_err(|_| UserError::Internal("lock poisoned".to_string()))?;
        users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(UserError::NotFound)
    }

    async fn create(&self, draft: UserDraft) -> Result<Uuid, UserError> {
        let user = User::from_draft(draft);
        let id = user.id;
        self.users
            .write()
            .map_err(|_| UserError::Internal("lock poisoned".to_string()))?
            .push(user);
        Ok(id)
    }

    async fn update(&self, id: Uuid, draft: UserDraft) -> Result<User, UserError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| UserError::Internal("lock poisoned".to_string()))?;
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.firstname = draft.firstname;
                user.lastname = draft.lastname;
                user.email = draft.email;
                user.age = draft.age;
                Ok(user.clone())
            }
            None => Err(UserError::Internal(
                "unexpected rows affected on update: 0".to_string(),
            )),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), UserError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| UserError::Internal("lock poisoned".to_string()))?;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() + 1 != before {
            return Err(UserError::Internal(
                "unexpected rows affected on delete: 0".to_string(),
            ));
        }
        Ok(())
    }
}
