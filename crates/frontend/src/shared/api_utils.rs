//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs. The base is derived
//! from the page location (backend on port 3000) unless the environment
//! config supplies an explicit `api_base`.

use std::cell::RefCell;

thread_local! {
    static API_BASE_OVERRIDE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Install (or remove) an explicit API base, e.g. from `EnvConfig.api_base`.
pub fn set_api_base_override(base: Option<String>) {
    if let Some(base) = &base {
        log::info!("API base overridden: {}", base);
    }
    API_BASE_OVERRIDE.with(|cell| *cell.borrow_mut() = base);
}

/// Get the base URL for API requests
///
/// # Returns
/// - the override if one was installed
/// - otherwise "http://<page host>:3000"
/// - empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE.with(|cell| cell.borrow().clone()) {
        return base;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/lines");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Percent-encode a single path segment (line ids, RFID codes)
pub fn segment(value: &str) -> String {
    urlencoding::encode(value.trim()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("L01"), "L01");
        assert_eq!(segment(" Line 2 "), "Line%202");
        assert_eq!(segment("a/b"), "a%2Fb");
    }

    #[test]
    fn test_override_wins() {
        set_api_base_override(Some("http://10.1.1.1:8080".to_string()));
        assert_eq!(api_url("/api/env"), "http://10.1.1.1:8080/api/env");
        set_api_base_override(None);
    }
}
