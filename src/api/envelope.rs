use serde::Deserialize;

use super::error::{DEFAULT_FAILURE_MESSAGE, FetchError};
use crate::models::StatisticsSnapshot;

/// `{ success, data?, error? }` wrapper every backend response uses.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<T, FetchError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => {
                let message = self
                    .error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
                Err(FetchError::Api(message))
            }
        }
    }
}

pub fn decode_envelope(body: &str) -> Result<StatisticsSnapshot, FetchError> {
    let envelope: Envelope<StatisticsSnapshot> = serde_json::from_str(body)?;
    envelope.into_result()
}

/// Decode a response that came back with a non-2xx status.
/// A readable envelope wins over the bare status code.
pub fn decode_error_response(status: u16, body: &str) -> FetchError {
    match serde_json::from_str::<Envelope<serde_json::Value>>(body) {
        Ok(envelope) => match envelope.error {
            Some(message) if !message.trim().is_empty() => FetchError::Api(message),
            _ => FetchError::Status { status },
        },
        Err(_) => FetchError::Status { status },
    }
}
