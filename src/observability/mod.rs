//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers, client, server
//!     → tracing events (structured fields: request_id, category)
//!     → logging.rs (EnvFilter + fmt layer to stdout)
//! ```

pub mod logging;
