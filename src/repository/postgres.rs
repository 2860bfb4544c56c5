//! PostgreSQL repository
//!
//! Issues parameterized SQL through a shared `PgPool` (the only resource
//! shared between concurrent requests) and maps rows to entities through
//! the `UserRow` row struct. Absence and row-count anomalies are translated
//! into domain error kinds here; sqlx failures are logged and surfaced as
//! `Internal`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;
use sqlx::FromRow;
use uuid::Uuid;

use super::UserRepository;
use crate::models::{User, UserDraft, UserError};

const SELECT_ALL: &str = "SELECT id, first_name, last_name, email, age, created FROM users";
const SELECT_BY_ID: &str =
    "SELECT id, first_name, last_name, email, age, created FROM users WHERE id = $1";
const INSERT: &str =
    "INSERT INTO users (id, first_name, last_name, email, age, created) VALUES ($1, $2, $3, $4, $5, $6)";
const UPDATE: &str = "UPDATE users SET first_name = $1, last_name = $2, email = $3, age = $4 \
     WHERE id = $5 RETURNING id, first_name, last_name, email, age, created";
const DELETE: &str = "DELETE FROM users WHERE id = $1";

/// Row shape of the `users` table
#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    age: i32,
    created: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            firstname: row.first_name,
            lastname: row.last_name,
            email: row.email,
            age: row.age.max(0) as u32,
            created: row.created,
        }
    }
}

/// User repository backed by PostgreSQL
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn persistence_error(err: sqlx::Error) -> UserError {
        tracing::error!(error = %err, "database operation failed");
        UserError::Internal(err.to_string())
    }
}

/// Convert an age to the column's signed 32-bit type without wrapping
fn age_to_sql(age: u32) -> Result<i32, UserError> {
    i32::try_from(age).map_err(|_| UserError::Internal(format!("age out of range: {}", age)))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query_as::<_, UserRow>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(Self::persistence_error)?;

        if rows.is_empty() {
            return Err(UserError::NotFound);
        }
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<User, UserError> {
        let row = sqlx::query_as::<_, UserRow>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::persistence_error)?;

        row.map(User::from).ok_or(UserError::NotFound)
    }

    async fn create(&self, draft: UserDraft) -> Result<Uuid, UserError> {
        let user = User::from_draft(draft);
        let age = age_to_sql(user.age)?;

        let result = sqlx::query(INSERT)
            .bind(user.id)
            .bind(&user.firstname)
            .bind(&user.lastname)
            .bind(&user.email)
            .bind(age)
            .bind(user.created)
            .execute(&self.pool)
            .await
            .map_err(Self::persistence_error)?;

        if result.rows_affected() != 1 {
            return Err(UserError::Internal(format!(
                "unexpected rows affected on insert: {}",
                result.rows_affected()
            )));
        }
        Ok(user.id)
    }

    async fn update(&self, id: Uuid, draft: UserDraft) -> Result<User, UserError> {
        let age = age_to_sql(draft.age)?;
        let row = sqlx::query_as::<_, UserRow>(UPDATE)
            .bind(&draft.firstname)
            .bind(&draft.lastname)
            .bind(&draft.email)
            .bind(age)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::persistence_error)?;

        // An unknown id lands here as zero returned rows and is reported as
        // an internal failure, not NotFound. Callers that need the
        // distinction must read first, the way the delete path does.
        row.map(User::from).ok_or_else(|| {
            UserError::Internal("unexpected rows affected on update: 0".to_string())
        })
    }

    async fn delete(&self, id: Uuid) -> Result<(), UserError> {
        let result = sqlx::query(DELETE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Self::persistence_error)?;

        if result.rows_affected() != 1 {
            return Err(UserError::Internal(format!(
                "unexpected rows affected on delete: {}",
                result.rows_affected()
            )));
        }
        Ok(())
    }
}
