//! Doctor query adapter library.
//!
//! Serves `GET /healthcare/querydoctor/{category}` by forwarding to a
//! healthcare backend and mapping its answer to `200`, `404` or `500`.

pub mod config;
pub mod healthcare;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::AdapterConfig;
pub use healthcare::{BackendError, Doctor, DoctorClient};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
