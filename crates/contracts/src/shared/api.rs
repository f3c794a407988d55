use serde::{Deserialize, Serialize};

/// `{ success, data, message }` wrapper used by the JSON endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Human-readable reason, if the backend gave one.
    pub fn reason(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// The reason carried by an error response body, if it is JSON and has one.
pub fn backend_reason(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.reason().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_reason() {
        assert_eq!(
            backend_reason(r#"{"error":"Income sources are required"}"#).as_deref(),
            Some("Income sources are required")
        );
        assert_eq!(backend_reason(r#"{"message":"bad file"}"#).as_deref(), Some("bad file"));
        assert_eq!(backend_reason("<html>Bad Gateway</html>"), None);
        assert_eq!(backend_reason(r#"{"error":"  "}"#), None);
    }

    #[test]
    fn test_envelope() {
        let env: ApiEnvelope<u32> = serde_json::from_str(r#"{"success":true,"data":7}"#).unwrap();
        assert_eq!(env.data, 7);
        assert_eq!(env.success, Some(true));
    }
}
