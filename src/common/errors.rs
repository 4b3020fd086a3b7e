use thiserror::Error;

/// Failure modes of a backend call.
///
/// Every API function surfaces one of these; the UI layer turns them into a
/// generic alert and logs the detail to the console.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Server reported failure")]
    Rejected,

    #[error("Browser API error: {0}")]
    Browser(String),
}

impl From<wasm_bindgen::JsValue> for ApiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ApiError::Browser(format!("{value:?}"))
    }
}
