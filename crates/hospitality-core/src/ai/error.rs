use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("No API key configured")]
    MissingKey,

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Unauthorized - API key may be invalid")]
    Unauthorized,

    #[error("Model not found: {0}")]
    NotFound(String),

    #[error("Rate limited by the AI service")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Response did not match the requested schema: {0}")]
    SchemaMismatch(#[from] serde_json::Error),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl AiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let cut: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
            format!("{}... (truncated, {} total bytes)", cut, body.len())
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 => AiError::Unauthorized,
            403 => AiError::AccessDenied(truncated),
            404 => AiError::NotFound(truncated),
            429 => AiError::RateLimited,
            500..=599 => AiError::ServerError(truncated),
            _ => AiError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(AiError::from_status(StatusCode::UNAUTHORIZED, ""), AiError::Unauthorized));
        assert!(matches!(AiError::from_status(StatusCode::TOO_MANY_REQUESTS, ""), AiError::RateLimited));
        assert!(matches!(
            AiError::from_status(StatusCode::BAD_GATEWAY, "upstream"),
            AiError::ServerError(ref b) if b == "upstream"
        ));
        assert!(matches!(
            AiError::from_status(StatusCode::BAD_REQUEST, "bad"),
            AiError::InvalidResponse(_)
        ));
    }

    #[test]
    fn test_long_body_truncated() {
        let body = "x".repeat(2000);
        match AiError::from_status(StatusCode::FORBIDDEN, &body) {
            AiError::AccessDenied(msg) => {
                assert!(msg.len() < 600);
                assert!(msg.ends_with("(truncated, 2000 total bytes)"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
