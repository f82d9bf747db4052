use puppy_bowl_protocol::envelope::ApiError;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::utils::js_error_message;

/// Everything that can go wrong while talking to the roster API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Not running in a browser: there is no global `window` to fetch with.
    #[error("no global `window` exists")]
    NoWindow,

    /// `fetch` rejected, or a JS call on the request or response threw.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status and a body that is not an envelope.
    #[error("HTTP {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// The body was not a valid envelope.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope reported a failure.
    #[error("API error {0}")]
    Api(ApiError),

    /// The envelope claimed success but carried no data under the expected key.
    #[error("response has no `{0}` data")]
    MissingData(&'static str),
}

impl From<JsValue> for ClientError {
    fn from(error: JsValue) -> Self {
        ClientError::Network(js_error_message(&error))
    }
}

impl From<ApiError> for ClientError {
    fn from(error: ApiError) -> Self {
        ClientError::Api(error)
    }
}
