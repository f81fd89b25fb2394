//! Doctor records as served by the healthcare backend.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One doctor entry from the backend listing.
///
/// Passed through untouched: whatever the backend sends for these fields is
/// what the adapter's caller receives. `fee` keeps the backend's literal
/// (`7000` stays `7000`, long decimals are not rounded through `f64`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Doctor {
    pub name: String,
    pub hospital: String,
    pub category: String,
    pub availability: String,
    pub fee: Number,
}
