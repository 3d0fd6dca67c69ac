use thiserror::Error;

pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to load statistics";

/// Everything that can go wrong while loading a snapshot.
/// `Display` is the human-readable message shown on the error screen.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The backend answered with `success: false` (or no data).
    #[error("{0}")]
    Api(String),

    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("{0}")]
    Network(String),

    #[error("Invalid statistics payload: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        // Drop query strings from echoed URLs
        let msg = e.to_string();
        let sanitized = match msg.find('?') {
            Some(idx) => format!("{}?<query redacted>", &msg[..idx]),
            None => msg,
        };
        FetchError::Network(sanitized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_user_message() {
        assert_eq!(FetchError::Api("Quota exceeded".into()).to_string(), "Quota exceeded");
        assert_eq!(FetchError::Status { status: 502 }.to_string(), "HTTP 502");
        assert_eq!(
            FetchError::Decode("expected value".into()).message(),
            "Invalid statistics payload: expected value"
        );
    }

    #[test]
    fn serde_errors_become_decode_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }
}
