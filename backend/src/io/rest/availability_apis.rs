//! # REST API for Availability Records
//!
//! Endpoints for creating, replacing, quick-updating, and listing the
//! authenticated caller's availability declarations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use crate::io::rest::auth::AuthedUser;
use crate::io::rest::domain_error_response;
use crate::io::rest::mappers::AvailabilityMapper;
use crate::AppState;
use shared::{CreateAvailabilityRequest, QuickUpdateRequest};

/// Create a new availability record for the caller
pub async fn create_availability(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Json(request): Json<CreateAvailabilityRequest>,
) -> impl IntoResponse {
    info!("POST /availability - user: {}", user.id);

    let command = AvailabilityMapper::to_upsert_command(request);
    match state.availability_service.create(&user, command).await {
        Ok(record) => (
            StatusCode::CREATED,
            Json(AvailabilityMapper::to_dto(record, &user)),
        )
            .into_response(),
        Err(e) => domain_error_response("creating availability", e),
    }
}

/// Replace an existing availability record owned by the caller
pub async fn update_availability(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Path(availability_id): Path<String>,
    Json(request): Json<CreateAvailabilityRequest>,
) -> impl IntoResponse {
    info!("PUT /availability/{} - user: {}", availability_id, user.id);

    let command = AvailabilityMapper::to_upsert_command(request);
    match state
        .availability_service
        .update(&user, &availability_id, command)
        .await
    {
        Ok(record) => (
            StatusCode::OK,
            Json(AvailabilityMapper::to_dto(record, &user)),
        )
            .into_response(),
        Err(e) => domain_error_response("updating availability", e),
    }
}

/// Create-or-replace the caller's single-day declaration for a date
pub async fn quick_update_availability(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Json(request): Json<QuickUpdateRequest>,
) -> impl IntoResponse {
    info!("POST /quick-update - user: {} date: {}", user.id, request.date);

    let command = AvailabilityMapper::to_quick_update_command(request);
    match state.availability_service.quick_update(&user, command).await {
        Ok(record) => (
            StatusCode::CREATED,
            Json(AvailabilityMapper::to_dto(record, &user)),
        )
            .into_response(),
        Err(e) => domain_error_response("quick-updating availability", e),
    }
}

/// List every availability record of the caller
pub async fn list_my_availability(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
) -> impl IntoResponse {
    info!("GET /my-availability - user: {}", user.id);

    match state.availability_service.list_for_owner(&user).await {
        Ok(records) => {
            let dtos: Vec<shared::Availability> = records
                .into_iter()
                .map(|record| AvailabilityMapper::to_dto(record, &user))
                .collect();
            (StatusCode::OK, Json(dtos)).into_response()
        }
        Err(e) => domain_error_response("listing availability", e),
    }
}
