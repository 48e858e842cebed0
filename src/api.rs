/// HTTP client for the local Haloscope analysis backend

use std::fmt;

use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, RequestMode, Response};

use crate::analysis::AnalysisResult;

const API_BASE: &str = "http://127.0.0.1:5000";

/// Client-side timeout for the advisory health probe
const HEALTH_TIMEOUT_MS: i32 = 3_000;

/// Shown when the transport gives us nothing better to say
pub const FALLBACK_MESSAGE: &str =
    "Failed to analyze page. Make sure the backend is running on port 5000.";

/// A failed backend interaction, already reduced to something displayable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response status
    Http(u16),
    /// `error` field inside an otherwise successful response
    Backend(String),
    /// Network failure, timeout, or an unparseable response
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(status) => write!(f, "HTTP error! status: {}", status),
            ApiError::Backend(message) => f.write_str(message),
            ApiError::Transport(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Whether the backend can fetch this page at all.
/// Browser-internal pages (chrome://, about:, file:) are not analyzable.
pub fn is_analyzable_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// POST the page URL to `/analyze` and decode the result.
///
/// Failure taxonomy: non-2xx status, an `error` field in the body, or any
/// transport problem, each mapped to its `ApiError` variant.
pub async fn analyze(page_url: &str) -> Result<AnalysisResult, ApiError> {
    let body = serde_json::json!({ "url": page_url }).to_string();

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&format!("{}/analyze", API_BASE), &opts)
        .map_err(transport_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport_error)?;

    let response = fetch(&request).await?;
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    let json = JsFuture::from(response.json().map_err(transport_error)?)
        .await
        .map_err(transport_error)?;
    let result: AnalysisResult = serde_wasm_bindgen::from_value(json)
        .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e)))?;

    if let Some(message) = &result.error {
        return Err(ApiError::Backend(message.clone()));
    }

    Ok(result)
}

/// GET `/health`, aborting after `HEALTH_TIMEOUT_MS`.
///
/// Advisory only: callers log the outcome and move on, the user is never
/// shown a probe failure.
pub async fn probe_health() -> Result<(), ApiError> {
    let controller = AbortController::new().map_err(transport_error)?;
    let signal = controller.signal();

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    opts.set_signal(Some(&signal));

    let request = Request::new_with_str_and_init(&format!("{}/health", API_BASE), &opts)
        .map_err(transport_error)?;

    let window = window()?;
    let abort = Closure::once_into_js(move || controller.abort());
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            abort.unchecked_ref(),
            HEALTH_TIMEOUT_MS,
        )
        .map_err(transport_error)?;

    let response = fetch(&request).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Http(response.status()))
    }
}

async fn fetch(request: &Request) -> Result<Response, ApiError> {
    let window = window()?;
    let response = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(transport_error)?;
    response
        .dyn_into::<Response>()
        .map_err(|_| ApiError::Transport(FALLBACK_MESSAGE.to_string()))
}

fn window() -> Result<web_sys::Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::Transport("no window available".to_string()))
}

/// Pull a human-readable message out of a thrown JS value, falling back to
/// the "is the backend running?" hint when there is none.
fn transport_error(value: JsValue) -> ApiError {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        let message = String::from(error.message());
        if !message.is_empty() {
            return ApiError::Transport(message);
        }
    }
    if let Some(message) = value.as_string() {
        if !message.is_empty() {
            return ApiError::Transport(message);
        }
    }
    ApiError::Transport(FALLBACK_MESSAGE.to_string())
}
