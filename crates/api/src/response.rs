//! Shared response envelope types for API handlers.
//!
//! List endpoints use a `{ "data": ... }` envelope. `GET /api/atlas-data`
//! is the exception: the web client consumes the document shape directly.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
