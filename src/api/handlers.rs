//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{ErrorResponse, ForecastQuery, ForecastRecord, RecommendationResponse};

/// Returns forecast records, optionally filtered by hour-index range.
///
/// `GET /forecast` → 200 + `Vec<ForecastRecord>` JSON
/// `GET /forecast?from=N&to=M` → filtered range (inclusive)
/// `GET /forecast?from=10&to=5` → 400 + `ErrorResponse`
pub async fn get_forecast(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ForecastQuery>,
) -> impl IntoResponse {
    let from = query.from.unwrap_or(0);
    let to = query.to.unwrap_or(usize::MAX);

    if from > to {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("`from` ({from}) must be <= `to` ({to})"),
            }),
        ));
    }

    let records: Vec<ForecastRecord> = state
        .series
        .iter()
        .enumerate()
        .filter(|(hour, _)| *hour >= from && *hour <= to)
        .map(|(hour, p)| ForecastRecord::from_point(hour, p))
        .collect();

    Ok(Json(records))
}

/// Returns the scheduling recommendation computed at startup.
///
/// `GET /recommendation` → 200 + `RecommendationResponse` JSON
pub async fn get_recommendation(
    State(state): State<Arc<AppState>>,
) -> Json<RecommendationResponse> {
    Json(RecommendationResponse {
        region: state.region.clone(),
        job: state.job,
        optimal: state.optimal,
        savings: state.savings,
        next_green_hour: state.next_green_hour,
    })
}
