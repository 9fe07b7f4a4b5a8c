//! NexTrip client error types.

/// Errors from the NexTrip HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum NexTripError {
    /// HTTP request failed (connection refused, DNS, reset, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" (body: {body})"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NexTripError::Api {
            status: 400,
            message: "The request is invalid.".into(),
        };
        assert_eq!(err.to_string(), "API error 400: The request is invalid.");

        let err = NexTripError::Json {
            message: "expected value at line 1 column 1".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: expected value at line 1 column 1 (body: <html>)"
        );

        let err = NexTripError::Json {
            message: "EOF while parsing".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: EOF while parsing");
    }
}
