//! `GET /healthcare/querydoctor/{category}`

use axum::{
    extract::{Path, State},
    http::HeaderMap,
};

use crate::http::request::X_REQUEST_ID;
use crate::http::response::QueryOutcome;
use crate::http::server::AppState;

/// Forward a category query to the backend and map the outcome.
pub async fn query_doctor(
    State(state): State<AppState>,
    Path(category): Path<String>,
    headers: HeaderMap,
) -> QueryOutcome {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info!(
        request_id = %request_id,
        category = %category,
        "Querying doctors by category"
    );

    let result = state.doctors.doctors_by_category(&category).await;
    if let Err(e) = &result {
        tracing::warn!(request_id = %request_id, category = %category, error = %e, "Doctor query failed");
    }

    QueryOutcome::from_result(&category, result)
}
