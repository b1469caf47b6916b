//! # REST API for Calendar Views
//!
//! Day and month projections of the caller's availability.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::info;

use crate::io::rest::auth::AuthedUser;
use crate::io::rest::domain_error_response;
use crate::io::rest::mappers::AvailabilityMapper;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: String,
}

/// Month view: one entry per calendar date
pub async fn get_month_availability(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Query(query): Query<MonthQuery>,
) -> impl IntoResponse {
    info!(
        "GET /month?year={}&month={} - user: {}",
        query.year, query.month, user.id
    );

    match state
        .availability_service
        .month_view(&user, query.year, query.month)
        .await
    {
        Ok(view) => (StatusCode::OK, Json(AvailabilityMapper::to_month_dto(view))).into_response(),
        Err(e) => domain_error_response("computing month view", e),
    }
}

/// Single-day view
pub async fn get_day_availability(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Query(query): Query<DayQuery>,
) -> impl IntoResponse {
    info!("GET /day?date={} - user: {}", query.date, user.id);

    match state.availability_service.day_view(&user, &query.date).await {
        Ok(day) => (StatusCode::OK, Json(AvailabilityMapper::to_day_dto(day))).into_response(),
        Err(e) => domain_error_response("computing day view", e),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::io::rest::test_support::authed_app;
    use shared::{DayAvailability, ErrorResponse, MonthAvailability};

    fn get(uri: &str, token: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .method(Method::GET)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    }

    fn post_availability(token: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .uri("/availability")
            .method(Method::POST)
            .header("authorization", format!("Bearer {token}"))
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn json_body<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn month_view_has_one_entry_per_date() {
        let (app, token, _) = authed_app().await;

        let response = app
            .oneshot(get("/month?year=2025&month=7", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let month: MonthAvailability = json_body(response).await;
        assert_eq!(month.year, 2025);
        assert_eq!(month.month, 7);
        assert_eq!(month.user.name, "Robin");
        assert_eq!(month.days.len(), 31);

        // With nothing declared, every day is the default all-busy object.
        let first = &month.days[0];
        assert_eq!(first.date, "2025-07-01");
        assert_eq!(first.day, 1);
        assert_eq!(first.time_slots.len(), 4);
        assert_eq!(first.total_available_slots, 0);
        assert!(first.availability_id.is_none());
        for slot in &first.time_slots {
            assert!(!slot.available);
            assert_eq!(slot.status_display, "Busy");
        }
    }

    #[tokio::test]
    async fn month_view_rejects_out_of_range_months() {
        let (app, token, _) = authed_app().await;

        let response = app
            .clone()
            .oneshot(get("/month?year=2025&month=13", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = json_body(response).await;
        assert_eq!(error.error, "Month must be between 1 and 12");

        let response = app
            .oneshot(get("/month?year=10000&month=6", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = json_body(response).await;
        assert_eq!(error.error, "Year must be between 1 and 9999");
    }

    #[tokio::test]
    async fn weekly_record_shows_up_on_matching_dates_only() {
        let (app, token, _) = authed_app().await;

        let body = serde_json::json!({
            "morning_available": true,
            "morning_status": "available",
            "repeat_schedule": "weekly",
            "start_date": "2025-07-01",
            "end_date": "2025-07-31",
        });
        let response = app
            .clone()
            .oneshot(post_availability(&token, &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(get("/day?date=2025-07-08", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let day: DayAvailability = json_body(response).await;
        assert_eq!(day.total_available_slots, 1);
        assert!(day.availability_id.is_some());
        assert!(day.time_slots[0].available);

        let response = app
            .clone()
            .oneshot(get("/day?date=2025-07-09", &token))
            .await
            .unwrap();
        let day: DayAvailability = json_body(response).await;
        assert_eq!(day.total_available_slots, 0);
        assert!(day.availability_id.is_none());

        let response = app
            .oneshot(get("/month?year=2025&month=7", &token))
            .await
            .unwrap();
        let month: MonthAvailability = json_body(response).await;
        let active: Vec<u32> = month
            .days
            .iter()
            .filter(|d| d.availability_id.is_some())
            .map(|d| d.day)
            .collect();
        assert_eq!(active, vec![1, 8, 15, 22, 29]);
    }

    #[tokio::test]
    async fn day_view_rejects_malformed_dates() {
        let (app, token, _) = authed_app().await;

        let response = app
            .oneshot(get("/day?date=2025-7", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = json_body(response).await;
        assert_eq!(error.error, "Invalid date format. Use YYYY-MM-DD");
        assert_eq!(error.field.as_deref(), Some("date"));
    }

    #[tokio::test]
    async fn views_never_leak_other_owners_records() {
        let (app, token, state) = authed_app().await;

        let other = state
            .user_service
            .provision_user("Alex", "token-alex")
            .await
            .unwrap();
        use crate::domain::commands::availability::QuickUpdateCommand;
        use crate::domain::models::availability as model;

        let busy = model::SlotSetting {
            available: false,
            status: model::AvailabilityStatus::Busy,
        };
        state
            .availability_service
            .quick_update(
                &other,
                QuickUpdateCommand {
                    date: "2025-07-08".to_string(),
                    slots: model::SlotGrid {
                        morning: model::SlotSetting {
                            available: true,
                            status: model::AvailabilityStatus::Available,
                        },
                        afternoon: busy,
                        evening: busy,
                        night: busy,
                    },
                    notes: None,
                },
            )
            .await
            .unwrap();

        let response = app
            .oneshot(get("/day?date=2025-07-08", &token))
            .await
            .unwrap();
        let day: DayAvailability = json_body(response).await;
        assert!(day.availability_id.is_none());
        assert_eq!(day.total_available_slots, 0);
    }
}
