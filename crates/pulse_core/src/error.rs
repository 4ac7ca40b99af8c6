use thiserror::Error;

/// Shown when the backend answers with a non-success status and an empty body.
pub const HTTP_FALLBACK_MESSAGE: &str = "Failed to fetch summary.";

/// Shown when a failure carries no message of its own.
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Something went wrong.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Builds an HTTP failure from the raw response body.
    pub fn http(status: u16, body: &str) -> Self {
        let message = if body.is_empty() {
            HTTP_FALLBACK_MESSAGE.to_string()
        } else {
            body.to_string()
        };
        Error::Http { status, message }
    }

    pub fn is_transport(&self) -> bool {
        !matches!(self, Error::Http { .. })
    }

    /// The single string the UI layer displays for this failure.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            match self {
                Error::Http { .. } => HTTP_FALLBACK_MESSAGE.to_string(),
                _ => TRANSPORT_FALLBACK_MESSAGE.to_string(),
            }
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_uses_body() {
        let err = Error::http(500, "rate limited");
        assert_eq!(err.user_message(), "rate limited");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_http_error_whitespace_body_is_kept() {
        let err = Error::http(500, " \n");
        assert_eq!(err.user_message(), " \n");
    }

    #[test]
    fn test_http_error_empty_body_falls_back() {
        let err = Error::http(503, "");
        assert_eq!(err.user_message(), "Failed to fetch summary.");
        match err {
            Error::Http { status, .. } => assert_eq!(status, 503),
            _ => panic!("expected an HTTP error"),
        }
    }

    #[test]
    fn test_transport_error_messages() {
        let err = Error::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), "connection refused");
        assert!(err.is_transport());

        let err = Error::Transport(String::new());
        assert_eq!(err.user_message(), "Something went wrong.");

        let err = Error::Transport(" ".to_string());
        assert_eq!(err.user_message(), " ");
    }

    #[test]
    fn test_malformed_json_is_transport() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = Error::from(parse_err);
        assert!(err.is_transport());
        assert!(!err.user_message().is_empty());
    }
}
