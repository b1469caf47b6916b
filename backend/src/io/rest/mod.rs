//! # REST API Interface Layer
//!
//! HTTP endpoints for the availability backend. This layer handles:
//! - JSON request/response serialization
//! - Bearer-token authentication via the [`auth::AuthedUser`] extractor
//! - Error translation from domain errors to HTTP status codes
//!
//! It is a pure translation layer: validation and business rules live in
//! the domain services.

// Module declarations
pub mod auth;
pub mod availability_apis;
pub mod calendar_apis;
pub mod mappers;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::domain::models::availability::AvailabilityError;
use shared::ErrorResponse;

/// Translate a domain error into its HTTP response.
///
/// Storage faults are logged here and surfaced as an opaque 500; everything
/// else is the caller's mistake and carries the domain message verbatim.
pub(crate) fn domain_error_response(operation: &str, error: AvailabilityError) -> Response {
    match error {
        AvailabilityError::Validation { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::for_field(field, message)),
        )
            .into_response(),
        AvailabilityError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(AvailabilityError::NotFound.to_string())),
        )
            .into_response(),
        e @ (AvailabilityError::InvalidMonth(_) | AvailabilityError::InvalidYear(_)) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string()))).into_response()
        }
        AvailabilityError::Storage(e) => {
            error!("Failed to {}: {}", operation, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!("Error {operation}"))),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::storage::sqlite::DbConnection;
    use crate::{create_router, AppState};

    /// Router plus a provisioned user ("Robin") and its bearer token,
    /// backed by a fresh in-memory database.
    pub(crate) async fn authed_app() -> (axum::Router, String, AppState) {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        let state = AppState::from_db(db);
        state
            .user_service
            .provision_user("Robin", "token-robin")
            .await
            .expect("Failed to provision test user");
        let app = create_router(state.clone(), "http://localhost:8080")
            .expect("Failed to build test router");
        (app, "token-robin".to_string(), state)
    }
}
