//! User HTTP Routes
//!
//! Endpoints for the `/api/v1/users` surface. Handlers parse and validate
//! inbound requests, delegate to the use-case, and rely on `UserError`'s
//! `IntoResponse` for the status mapping.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{User, UserDraft, UserError};
use crate::usecase::UserUseCase;

// ==================
// Shared State
// ==================

/// State shared across user handlers
pub struct UserState {
    pub usecase: Arc<dyn UserUseCase>,
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self { deleted: true }
    }
}

// ==================
// Routes
// ==================

/// Create user routes
pub fn user_routes(state: Arc<UserState>) -> Router {
    Router::new()
        .route("/users", get(list_users_handler))
        .route("/users", post(create_user_handler))
        .route("/users/{id}", get(get_user_handler))
        .route("/users/{id}", put(update_user_handler))
        .route("/users/{id}", delete(delete_user_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn parse_user_id(raw: &str) -> Result<Uuid, UserError> {
    Uuid::parse_str(raw).map_err(|_| UserError::BadParam)
}

/// Decode a draft from raw bytes
///
/// Any decode failure is a 422, distinct from the 400 that field
/// validation produces afterwards.
fn decode_draft(body: &Bytes) -> Result<UserDraft, UserError> {
    serde_json::from_slice(body).map_err(|e| UserError::InvalidBody(e.to_string()))
}

// ==================
// Handlers
// ==================

async fn list_users_handler(
    State(state): State<Arc<UserState>>,
) -> Result<Json<Vec<User>>, UserError> {
    let users = state.usecase.get_all_users().await?;
    Ok(Json(users))
}

async fn get_user_handler(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> Result<Json<User>, UserError> {
    let id = parse_user_id(&id)?;
    let user = state.usecase.get_by_id(id).await?;
    Ok(Json(user))
}

async fn create_user_handler(
    State(state): State<Arc<UserState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<String>), UserError> {
    let draft = decode_draft(&body)?;
    draft.validate()?;

    let id = state.usecase.create(draft).await?;
    Ok((StatusCode::CREATED, Json(id.to_string())))
}

async fn update_user_handler(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<User>, UserError> {
    let id = parse_user_id(&id)?;
    let draft = decode_draft(&body)?;
    draft.validate()?;

    let user = state.usecase.update(id, draft).await?;
    Ok(Json(user))
}

async fn delete_user_handler(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, UserError> {
    let id = parse_user_id(&id)?;
    state.usecase.delete(id).await?;
    Ok(Json(DeleteResponse::success()))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::repository::InMemoryUserRepository;
    use crate::usecase::UserService;

    fn router() -> Router {
        let repository = Arc::new(InMemoryUserRepository::new());
        let usecase = Arc::new(UserService::new(repository, Duration::from_secs(2)));
        Router::new().nest("/api/v1", user_routes(Arc::new(UserState { usecase })))
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    const VALID_BODY: &str = r#"{"Firstname":"A","Lastname":"B","Email":"a@b.com","Age":30}"#;

    #[tokio::test]
    async fn test_list_empty_is_404() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["message"], "your requested item is not found");
    }

    #[tokio::test]
    async fn test_create_then_get_scenario() {
        let app = router();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/users", VALID_BODY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        let id = json.as_str().expect("id string body");
        Uuid::parse_str(id).expect("parsable id");

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/users/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["Firstname"], "A");
        assert_eq!(json["Lastname"], "B");
        assert_eq!(json["Email"], "a@b.com");
        assert_eq!(json["Age"], 30);
        assert!(json["Created"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_create_malformed_email_is_400() {
        let body = r#"{"Firstname":"A","Lastname":"B","Email":"not-an-email","Age":30}"#;
        let response = router()
            .oneshot(json_request("POST", "/api/v1/users", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_missing_field_is_400() {
        let body = r#"{"Firstname":"","Lastname":"B","Email":"a@b.com","Age":30}"#;
        let response = router()
            .oneshot(json_request("POST", "/api/v1/users", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_age_beyond_storage_range_is_400() {
        let body = r#"{"Firstname":"A","Lastname":"B","Email":"a@b.com","Age":2147483648}"#;
        let response = router()
            .oneshot(json_request("POST", "/api/v1/users", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_undecodable_body_is_422() {
        let response = router()
            .oneshot(json_request("POST", "/api/v1/users", "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_get_bad_id_is_400() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/users/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_404() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/users/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_created() {
        let app = router();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/users", VALID_BODY))
            .await
            .unwrap();
        let id = body_json(response).await.as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/users/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let before = body_json(response).await;

        let updated_body = r#"{"Firstname":"C","Lastname":"D","Email":"c@d.com","Age":40}"#;
        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/v1/users/{}", id),
                updated_body,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let after = body_json(response).await;
        assert_eq!(after["ID"], before["ID"]);
        assert_eq!(after["Created"], before["Created"]);
        assert_eq!(after["Firstname"], "C");
        assert_eq!(after["Email"], "c@d.com");
        assert_eq!(after["Age"], 40);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let app = router();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/users", VALID_BODY))
            .await
            .unwrap();
        let id = body_json(response).await.as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/users/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["deleted"], true);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/users/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_404_not_500() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/users/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
