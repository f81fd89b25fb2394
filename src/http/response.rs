//! Response mapping for doctor queries.
//!
//! Every backend outcome lands in exactly one of three shapes:
//! - doctors → `200` with the JSON array as received
//! - backend client error → `404` with `category not found: {category}`
//! - anything else → `500` with the error message

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::healthcare::{BackendError, Doctor};

/// Outcome of one doctor query, ready to be turned into a response.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Doctors(Vec<Doctor>),
    CategoryNotFound(String),
    Failed(String),
}

impl QueryOutcome {
    /// Classify a backend result for the given category.
    pub fn from_result(category: &str, result: Result<Vec<Doctor>, BackendError>) -> Self {
        match result {
            Ok(doctors) => QueryOutcome::Doctors(doctors),
            Err(e) if e.is_client_error() => QueryOutcome::CategoryNotFound(category.to_string()),
            Err(e) => QueryOutcome::Failed(e.to_string()),
        }
    }

    /// Status code this outcome is served with.
    pub fn status(&self) -> StatusCode {
        match self {
            QueryOutcome::Doctors(_) => StatusCode::OK,
            QueryOutcome::CategoryNotFound(_) => StatusCode::NOT_FOUND,
            QueryOutcome::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for QueryOutcome {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            QueryOutcome::Doctors(doctors) => (status, Json(doctors)).into_response(),
            QueryOutcome::CategoryNotFound(category) => {
                (status, format!("category not found: {}", category)).into_response()
            }
            QueryOutcome::Failed(message) => (status, message).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header::CONTENT_TYPE;
    use reqwest::StatusCode as BackendStatus;

    fn doctor(name: &str) -> Doctor {
        Doctor {
            name: name.into(),
            hospital: "grand oak community hospital".into(),
            category: "surgery".into(),
            availability: "9.00 a.m - 11.00 a.m".into(),
            fee: serde_json::Number::from(7000),
        }
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn classification() {
        let ok = QueryOutcome::from_result("surgery", Ok(vec![doctor("a")]));
        assert_eq!(ok, QueryOutcome::Doctors(vec![doctor("a")]));

        let rejected = QueryOutcome::from_result(
            "unknown-xyz",
            Err(BackendError::Rejected(BackendStatus::NOT_FOUND)),
        );
        assert_eq!(rejected, QueryOutcome::CategoryNotFound("unknown-xyz".into()));

        let failed = QueryOutcome::from_result(
            "surgery",
            Err(BackendError::Status(BackendStatus::INTERNAL_SERVER_ERROR)),
        );
        assert_eq!(
            failed,
            QueryOutcome::Failed("backend returned status 500 Internal Server Error".into())
        );
    }

    #[test]
    fn any_4xx_is_not_found() {
        let outcome = QueryOutcome::from_result(
            "ent",
            Err(BackendError::Rejected(BackendStatus::BAD_REQUEST)),
        );
        assert_eq!(outcome.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn doctors_render_as_json() {
        let response = QueryOutcome::Doctors(vec![doctor("a"), doctor("b")]).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

        let parsed: Vec<Doctor> = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(parsed, vec![doctor("a"), doctor("b")]);
    }

    #[tokio::test]
    async fn not_found_body() {
        let response = QueryOutcome::CategoryNotFound("unknown-xyz".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "category not found: unknown-xyz");
    }

    #[tokio::test]
    async fn failure_body_is_message() {
        let response = QueryOutcome::Failed("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(body_text(response).await, "boom");
    }
}
