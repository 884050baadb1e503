//! Thin JSON layer over `gloo-net` shared by every `api.rs` module.
//!
//! Every request carries an abort signal tied to a timer so a hung backend
//! shows up as `ApiError::Timeout` instead of a future that never resolves.

use crate::shared::api_utils::api_url;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use web_sys::AbortController;

pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Not found")]
    NotFound,

    #[error("Server error: HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn from_status(status: u16) -> Self {
        if status == 404 {
            ApiError::NotFound
        } else {
            ApiError::Status(status)
        }
    }
}

/// Raw response: status and body, for endpoints with lenient decoding.
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

async fn send_with_timeout(
    build: impl FnOnce(Option<&web_sys::AbortSignal>) -> Result<Request, ApiError>,
) -> Result<Response, ApiError> {
    let controller = AbortController::new().ok();
    let timed_out = Rc::new(Cell::new(false));
    let done = Rc::new(Cell::new(false));

    if let Some(controller) = controller.clone() {
        let timed_out = timed_out.clone();
        let done = done.clone();
        spawn_local(async move {
            TimeoutFuture::new(REQUEST_TIMEOUT_MS).await;
            if !done.get() {
                timed_out.set(true);
                controller.abort();
            }
        });
    }

    let signal = controller.as_ref().map(|c| c.signal());
    let request = build(signal.as_ref())?;
    let result = request.send().await;
    done.set(true);

    match result {
        Ok(response) => Ok(response),
        Err(_) if timed_out.get() => Err(ApiError::Timeout),
        Err(e) => Err(ApiError::Network(e.to_string())),
    }
}

fn builder_for_get(path: &str) -> RequestBuilder {
    Request::get(&api_url(path))
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .header("Pragma", "no-cache")
}

/// GET returning status and body without interpreting them.
pub async fn get_raw(path: &str) -> Result<RawResponse, ApiError> {
    let response = send_with_timeout(|signal| {
        builder_for_get(path)
            .abort_signal(signal)
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))
    })
    .await?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(RawResponse { status, body })
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send_with_timeout(|signal| {
        builder_for_get(path)
            .abort_signal(signal)
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))
    })
    .await?;

    if !response.ok() {
        return Err(ApiError::from_status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET where 404 means "nothing there" rather than an error.
pub async fn get_optional_json<T: DeserializeOwned>(path: &str) -> Result<Option<T>, ApiError> {
    match get_json::<T>(path).await {
        Ok(value) => Ok(Some(value)),
        Err(ApiError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = api_url(path);
    let response = send_with_timeout(|signal| {
        Request::post(&url)
            .abort_signal(signal)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))
    })
    .await?;

    if !response.ok() {
        return Err(ApiError::from_status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(404), ApiError::NotFound);
        assert_eq!(ApiError::from_status(500), ApiError::Status(500));
        assert_eq!(ApiError::Status(502).to_string(), "Server error: HTTP 502");
    }
}
