//! API utilities for talking to the MGNREGA backend.
//!
//! Provides URL construction plus JSON request helpers. Every request
//! races a shared 10-second timeout, and all failures surface as plain
//! strings that the flow layers translate into UI state.

use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Versioned path prefix of the backend API.
pub const API_ROOT: &str = "/api/v1";

/// Port the backend listens on, on the same host that served the app.
const BACKEND_PORT: u16 = 8000;

/// Ceiling on any single backend request.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path relative to [`API_ROOT`]
///
/// # Arguments
/// * `path` - The endpoint path (should start with "/")
pub fn api_url(path: &str) -> String {
    format!("{}{}{}", api_base(), API_ROOT, path)
}

/// GET `path` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = api_url(path);
    let response = send_with_timeout(async move { Request::get(&url).send().await }).await?;
    decode(response).await
}

/// POST `body` as JSON to `path` and decode the JSON response.
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let payload =
        serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))?;
    let url = api_url(path);
    let response = send_with_timeout(async move {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .body(payload)?
            .send()
            .await
    })
    .await?;
    decode(response).await
}

/// Races a request against [`REQUEST_TIMEOUT_MS`]. A timeout surfaces the
/// same way as any other transport failure so callers handle one error
/// shape.
async fn send_with_timeout<F>(request: F) -> Result<Response, String>
where
    F: std::future::Future<Output = Result<Response, gloo_net::Error>>,
{
    futures::pin_mut!(request);
    match future::select(request, TimeoutFuture::new(REQUEST_TIMEOUT_MS)).await {
        Either::Left((outcome, _)) => outcome.map_err(|e| format!("Request failed: {}", e)),
        Either::Right(((), _)) => Err("Request timed out".to_string()),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
