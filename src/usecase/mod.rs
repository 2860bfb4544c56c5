//! # Use-Case Layer
//!
//! Wraps every repository call in a bounded-duration future using the
//! single configured timeout. The one piece of business logic lives here:
//! delete confirms existence first, so a missing record comes back as
//! `NotFound` instead of relying on the repository's affected-row check.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{User, UserDraft, UserError};
use crate::repository::UserRepository;

/// Capability set exposed to the HTTP handlers
#[async_trait]
pub trait UserUseCase: Send + Sync {
    async fn get_all_users(&self) -> Result<Vec<User>, UserError>;
    async fn get_by_id(&self, id: Uuid) -> Result<User, UserError>;
    async fn create(&self, draft: UserDraft) -> Result<Uuid, UserError>;
    async fn update(&self, id: Uuid, draft: UserDraft) -> Result<User, UserError>;
    async fn delete(&self, id: Uuid) -> Result<(), UserError>;
}

/// Use-case implementation over an abstract repository
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    call_timeout: Duration,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, call_timeout: Duration) -> Self {
        Self {
            repository,
            call_timeout,
        }
    }

    /// Run a repository future under the shared deadline
    ///
    /// Expiry is reported upstream as an internal failure; there is no
    /// retry and no cancellation beyond dropping the future.
    async fn bounded<T, F>(&self, fut: F) -> Result<T, UserError>
    where
        F: Future<Output = Result<T, UserError>> + Send,
    {
        match tokio::time::timeout(self.call_timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(timeout = ?self.call_timeout, "repository call deadline exceeded");
                Err(UserError::Internal(
                    "operation deadline exceeded".to_string(),
                ))
            }
        }
    }
}

#[async_trait]
impl UserUseCase for UserService {
    async fn get_all_users(&self) -> Result<Vec<User>, UserError> {
        self.bounded(self.repository.get_all()).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<User, UserError> {
        self.bounded(self.repository.get_by_id(id)).await
    }

    async fn create(&self, draft: UserDraft) -> Result<Uuid, UserError> {
        self.bounded(self.repository.create(draft)).await
    }

    async fn update(&self, id: Uuid, draft: UserDraft) -> Result<User, UserError> {
        self.bounded(self.repository.update(id, draft)).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), UserError> {
        // Existence check first: a missing record is NotFound here, before
        // the repository's affected-row check can turn it into Internal.
        self.bounded(async {
            self.repository.get_by_id(id).await?;
            self.repository.delete(id).await
        })
        .await
    }
}
