//! HTTP API Wrappers
//!
//! Frontend bindings to the todo REST API, organized by resource.

mod todo;

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use todo::*;

/// Base URL of the API, overridable at build time
pub const API_BASE: &str = match option_env!("GLASS_TODO_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Failure of a single API request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("could not reach the server ({0})")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("{}", describe_status(.status, .message))]
    Status { status: u16, message: String },
    /// The request body could not be built
    #[error("could not encode request ({0})")]
    Encode(String),
    /// The response body did not match the expected shape
    #[error("unexpected response ({0})")]
    Decode(String),
}

fn describe_status(status: &u16, message: &str) -> String {
    if message.is_empty() {
        format!("server responded with status {}", status)
    } else {
        message.to_string()
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Build `{base}/todos` or `{base}/todos/{id}` with the id escaped
pub fn todos_url(base: &str, id: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    match id {
        Some(id) => format!("{}/todos/{}", base, utf8_percent_encode(id, PATH_SEGMENT)),
        None => format!("{}/todos", base),
    }
}

/// Turn an error response into an `ApiError`, preferring the server's `{"error": ...}` message
pub fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string());
    ApiError::Status { status, message }
}

/// Attach a JSON body (and its content type) to a request
fn with_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

fn without_body(builder: RequestBuilder) -> Result<Request, ApiError> {
    builder
        .header("Accept", "application/json")
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))
}

/// Issue a request and return the response once its status is known to be 2xx
async fn send(request: Request) -> Result<Response, ApiError> {
    let method = request.method();
    let url = request.url();
    let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        leptos::logging::warn!("[API] {} {} -> {}", method, url, response.status());
        return Err(status_error(response.status(), &text));
    }
    Ok(response)
}

/// Request returning a JSON body
async fn request_json<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = send(request).await?;
    response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Request whose body, if any, is ignored
async fn request_empty(request: Request) -> Result<(), ApiError> {
    send(request).await.map(|_| ())
}
