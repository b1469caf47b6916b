//! # Availability Backend
//!
//! HTTP backend for declaring and viewing per-day availability across four
//! fixed time slots.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Business logic, services)
//!     ↓
//! Storage Layer (SQLite, persistence)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize and configure the application state
//! - Set up the REST API router with CORS and bearer-token auth
//! - Coordinate between domain logic and data persistence

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::Config;
use crate::domain::{AvailabilityService, UserService};
use crate::io::rest::{availability_apis, calendar_apis};
use crate::storage::sqlite::{
    DbConnection, SqliteAvailabilityRepository, SqliteUserRepository,
};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub availability_service: AvailabilityService,
    pub user_service: UserService,
}

impl AppState {
    /// Wire services onto an established database connection.
    pub fn from_db(db: DbConnection) -> Self {
        let availability_service =
            AvailabilityService::new(Arc::new(SqliteAvailabilityRepository::new(db.clone())));
        let user_service = UserService::new(Arc::new(SqliteUserRepository::new(db)));
        Self {
            availability_service,
            user_service,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    Ok(AppState::from_db(db))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(cors_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any);

    let router = Router::new()
        .route("/availability", post(availability_apis::create_availability))
        .route(
            "/availability/:availability_id",
            put(availability_apis::update_availability),
        )
        .route(
            "/quick-update",
            post(availability_apis::quick_update_availability),
        )
        .route("/my-availability", get(availability_apis::list_my_availability))
        .route("/month", get(calendar_apis::get_month_availability))
        .route("/day", get(calendar_apis::get_day_availability))
        .layer(cors)
        .with_state(app_state);

    Ok(router)
}
