//! Bearer-token authentication extractor.
//!
//! Every endpoint takes an [`AuthedUser`] argument; the extractor resolves
//! the `Authorization: Bearer <token>` header to a user before the handler
//! runs. Handlers therefore never see an unauthenticated request, and the
//! acting owner always comes from here rather than from request data.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::domain::models::user::User;
use crate::AppState;
use shared::ErrorResponse;

/// The authenticated caller.
pub struct AuthedUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthedUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let Some(token) = token else {
            return Err(unauthorized("Missing bearer token"));
        };

        match state.user_service.authenticate(token).await {
            Ok(Some(user)) => Ok(AuthedUser(user)),
            Ok(None) => Err(unauthorized("Invalid bearer token")),
            Err(e) => {
                error!("Failed to authenticate request: {}", e);
                Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Error authenticating request")),
                )
                    .into_response())
            }
        }
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}
