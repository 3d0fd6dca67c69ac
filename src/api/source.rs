use log::{debug, error, info};
use reqwest::blocking::Client;
use std::time::Duration;

use super::envelope::{decode_envelope, decode_error_response};
use super::error::FetchError;
use crate::config::ServerConfig;
use crate::models::{Period, StatisticsSnapshot};

/// Anything that can produce a statistics snapshot for a period.
///
/// Implementations must be shareable with the fetch worker thread.
pub trait StatisticsSource: Send + Sync {
    fn name(&self) -> &str;

    fn fetch(&self, period: Period) -> Result<StatisticsSnapshot, FetchError>;
}

/// `GET {base_url}/statistics?period=<p>` against the tracking backend.
pub struct HttpStatisticsSource {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpStatisticsSource {
    pub fn new(server: &ServerConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(server.timeout_secs.max(1)))
            .build()?;
        Ok(Self {
            client,
            base_url: server.base_url.trim_end_matches('/').to_string(),
            token: server.auth_token.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn statistics_url(&self, period: Period) -> String {
        format!("{}/statistics?period={}", self.base_url, period.as_str())
    }
}

impl StatisticsSource for HttpStatisticsSource {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch(&self, period: Period) -> Result<StatisticsSnapshot, FetchError> {
        let url = self.statistics_url(period);
        info!("Loading statistics for period: {}", period);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| {
            error!("Statistics request failed: {}", e);
            FetchError::from(e)
        })?;
        let status = response.status();
        let body = response.text()?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        if !status.is_success() {
            let err = decode_error_response(status.as_u16(), &body);
            error!("Statistics request returned {}: {}", status, err);
            return Err(err);
        }

        let snapshot = decode_envelope(&body)?;
        info!(
            "Statistics loaded: level {}, {} achievements",
            snapshot.level,
            snapshot.achievements.len()
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_period_url_without_double_slash() {
        let server = ServerConfig {
            base_url: "http://localhost:5000/api/".into(),
            auth_token: None,
            timeout_secs: 5,
        };
        let source = HttpStatisticsSource::new(&server).unwrap();
        assert_eq!(
            source.statistics_url(Period::Month),
            "http://localhost:5000/api/statistics?period=month"
        );
    }
}
