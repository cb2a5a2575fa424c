//! API utilities for frontend-backend communication
//!
//! Builds the REST base URL from the page location and the console config.

use crate::shared::config::ApiConfig;

/// Get the base URL for API requests
///
/// Uses the protocol and host of the current window with the configured
/// API port and prefix, e.g. "http://localhost:8000/api".
/// Resource paths (`/modules/`) are appended as-is.
pub fn api_base(config: &ApiConfig) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return config.prefix.clone(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname, config)
}

fn base_url(protocol: &str, hostname: &str, config: &ApiConfig) -> String {
    format!(
        "{}//{}:{}{}",
        protocol,
        hostname,
        config.port,
        config.prefix.trim_end_matches('/')
    )
}
