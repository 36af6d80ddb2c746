//! DTO for the visit counter endpoint.

use serde::Serialize;

/// Current value of the global visit counter.
#[derive(Debug, Serialize)]
pub struct CounterResponse {
    pub counter: String,
    pub visits: i64,
}
