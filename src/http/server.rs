//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the doctor query route
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener
//! - Drain gracefully when the shutdown signal fires

use axum::{routing::get, Router};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::AdapterConfig;
use crate::healthcare::handler::query_doctor;
use crate::healthcare::{BackendResult, DoctorClient};
use crate::http::request::UuidRequestId;

/// Path of the doctor query resource.
pub const QUERY_DOCTOR_ROUTE: &str = "/healthcare/querydoctor/{category}";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub doctors: DoctorClient,
}

/// HTTP server for the adapter.
pub struct HttpServer {
    router: Router,
    config: AdapterConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AdapterConfig) -> BackendResult<Self> {
        let state = AppState {
            doctors: DoctorClient::new(&config.backend)?,
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route(QUERY_DOCTOR_ROUTE, get(query_doctor))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    #[cfg(test)]
    pub(crate) fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.config.backend.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
