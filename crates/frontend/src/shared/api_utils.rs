//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Compile-time override of the backend origin, e.g.
/// `TAX_API_URL=https://tax.example.com/api trunk build`.
const CONFIGURED_API_URL: Option<&str> = option_env!("TAX_API_URL");

/// Get the base URL for API requests
///
/// Uses `TAX_API_URL` when it was set at build time, otherwise the current
/// window host on port 3000 where the backend listens in development.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com/api"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(url) = CONFIGURED_API_URL.filter(|u| !u.trim().is_empty()) {
        return url.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/tax/calculate");
/// ```
pub fn api_url(path: &str) -> String {
    join_api_url(&api_base(), path)
}

/// Join a base and an `/api/...` path without doubling the `/api` segment
/// when the configured base already ends with it.
pub fn join_api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    if base.ends_with("/api") {
        if let Some(rest) = path.strip_prefix("/api/") {
            return format!("{}/{}", base, rest);
        }
    }
    format!("{}{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_plain_origin() {
        assert_eq!(
            join_api_url("http://localhost:3000", "/api/tax/config"),
            "http://localhost:3000/api/tax/config"
        );
        assert_eq!(
            join_api_url("http://localhost:3000/", "api/tax/config"),
            "http://localhost:3000/api/tax/config"
        );
    }

    #[test]
    fn test_join_base_with_api_suffix() {
        assert_eq!(
            join_api_url("https://tax.example.com/api", "/api/transactions/analyze-statement-stream"),
            "https://tax.example.com/api/transactions/analyze-statement-stream"
        );
        assert_eq!(
            join_api_url("https://tax.example.com/api/", "/api/ai/chat"),
            "https://tax.example.com/api/ai/chat"
        );
    }

    #[test]
    fn test_join_relative_base() {
        assert_eq!(join_api_url("", "/api/tax/calculate"), "/api/tax/calculate");
    }
}
