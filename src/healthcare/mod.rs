//! Healthcare backend integration.
//!
//! # Data Flow
//! ```text
//! GET /healthcare/querydoctor/{category}
//!     → handler.rs (log category, call backend)
//!     → client.rs (GET {base_url}/{category}, classify outcome)
//!     → doctor.rs (payload shape)
//!     → http/response.rs (200 / 404 / 500)
//! ```

pub mod client;
pub mod doctor;
pub mod handler;

pub use client::{BackendError, BackendResult, DoctorClient};
pub use doctor::Doctor;
