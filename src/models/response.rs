use serde::Deserialize;

use crate::common::ApiError;

/// Success envelope used by the backend's list endpoints.
///
/// The wrapped array's field name varies per endpoint (`projects`,
/// `clients`, ...); serde aliases fold them all into `items` so one type
/// covers every list response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ListEnvelope<T> {
    pub success: bool,
    #[serde(
        alias = "projects",
        alias = "clients",
        alias = "contacts",
        alias = "newsletters"
    )]
    pub items: Vec<T>,
}

/// Either wire shape a list endpoint has been observed to return: the
/// success envelope, or a bare top-level array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Envelope(ListEnvelope<T>),
    Bare(Vec<T>),
}

impl<T> ListResponse<T> {
    /// Unwrap the items, treating a `success: false` envelope as a
    /// backend rejection.
    pub fn into_items(self) -> Result<Vec<T>, ApiError> {
        match self {
            ListResponse::Envelope(envelope) if envelope.success => Ok(envelope.items),
            ListResponse::Envelope(_) => Err(ApiError::Rejected),
            ListResponse::Bare(items) => Ok(items),
        }
    }
}

/// Boolean acknowledgement returned by every create endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
}
