//! Sentiment oracle - external polarity classification.
//!
//! The scoring pipeline never computes sentiment itself; it consumes one
//! coarse polarity label per analysis from an external inference server.
//! The trait seam keeps the orchestrator testable with a stub oracle.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;
use url::Url;

use crate::error::AppError;

const DEFAULT_CLASSIFY_TIMEOUT: Duration = Duration::from_secs(30);

/// Coarse sentiment polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Positive => "POSITIVE",
            Polarity::Negative => "NEGATIVE",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// External capability: classify a text span into a coarse polarity.
#[async_trait]
pub trait SentimentOracle: Send + Sync {
    async fn polarity(&self, text: &str) -> Result<Polarity, AppError>;
}

/// Label/score pair returned by the inference server.
#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    label: String,
    #[allow(dead_code)]
    score: Option<f64>,
}

/// HTTP client for a sentiment inference server exposing `POST /classify`.
#[derive(Debug)]
pub struct HttpSentimentClient {
    client: Client,
    classify_url: Url,
    auth_token: Option<String>,
    timeout: Duration,
}

impl HttpSentimentClient {
    pub fn new(base_url: &Url, auth_token: Option<String>) -> Result<Self, AppError> {
        let classify_url = base_url
            .join("classify")
            .map_err(|e| AppError::Config(format!("Invalid sentiment URL: {}", e)))?;
        Ok(Self {
            client: Client::new(),
            classify_url,
            auth_token,
            timeout: DEFAULT_CLASSIFY_TIMEOUT,
        })
    }

    #[cfg(test)]
    fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn build_request(&self, payload: &serde_json::Value) -> reqwest::RequestBuilder {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.auth_token {
            if let Ok(value) = format!("Bearer {}", token).parse() {
                headers.insert(AUTHORIZATION, value);
            }
        }

        self.client
            .post(self.classify_url.clone())
            .headers(headers)
            .json(payload)
    }
}

#[async_trait]
impl SentimentOracle for HttpSentimentClient {
    async fn polarity(&self, text: &str) -> Result<Polarity, AppError> {
        let payload = serde_json::json!({ "text": text });

        let request_future = self.build_request(&payload).send();
        let res = timeout(self.timeout, request_future).await??;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Model(format!(
                "Classify request failed with status {}: {}",
                status, body
            )));
        }

        let response: ClassifyResponse = res
            .json()
            .await
            .map_err(|e| AppError::Model(e.to_string()))?;

        debug!("Sentiment label: {}", response.label);

        match response.label.to_uppercase().as_str() {
            "POSITIVE" => Ok(Polarity::Positive),
            "NEGATIVE" => Ok(Polarity::Negative),
            other => Err(AppError::Model(format!(
                "Unexpected sentiment label: {}",
                other
            ))),
        }
    }
}

/// Deterministic oracle for tests.
#[cfg(test)]
pub struct FixedPolarityOracle(pub Polarity);

#[cfg(test)]
#[async_trait]
impl SentimentOracle for FixedPolarityOracle {
    async fn polarity(&self, _text: &str) -> Result<Polarity, AppError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> HttpSentimentClient {
        let base = Url::parse(&format!("{}/", server.uri())).unwrap();
        HttpSentimentClient::new(&base, None).unwrap()
    }

    #[tokio::test]
    async fn test_negative_label() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/classify"))
            .and(body_json(json!({ "text": "I feel terrible" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "label": "NEGATIVE", "score": 0.98 })),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let polarity = client.polarity("I feel terrible").await.unwrap();
        assert_eq!(polarity, Polarity::Negative);
    }

    #[tokio::test]
    async fn test_positive_label_case_insensitive() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/classify"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "label": "positive" })),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let polarity = client.polarity("great day").await.unwrap();
        assert_eq!(polarity, Polarity::Positive);
    }

    #[tokio::test]
    async fn test_server_error_maps_to_model_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/classify"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model crashed"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let err = client.polarity("anything").await.unwrap_err();
        match err {
            AppError::Model(msg) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("model crashed"));
            }
            other => panic!("Expected AppError::Model, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unexpected_label_is_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/classify"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "label": "NEUTRAL" })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let err = client.polarity("meh").await.unwrap_err();
        assert!(matches!(err, AppError::Model(_)));
    }

    #[tokio::test]
    async fn test_slow_model_maps_to_timeout_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/classify"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "label": "NEGATIVE" }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server)
            .await
            .with_timeout(Duration::from_millis(50));
        let err = client.polarity("anything").await.unwrap_err();
        assert!(matches!(err, AppError::Timeout(_)));
        assert_eq!(err.kind(), "timeout");
    }

    #[test]
    fn test_classify_url_joined_onto_base_path() {
        let base = Url::parse("http://sentiment.internal:9090/api/").unwrap();
        let client = HttpSentimentClient::new(&base, None).unwrap();
        assert_eq!(
            client.classify_url.as_str(),
            "http://sentiment.internal:9090/api/classify"
        );
    }

    #[test]
    fn test_unjoinable_base_url_is_config_error() {
        // cannot-be-a-base URLs have no path to join onto
        let base = Url::parse("mailto:ops@example.com").unwrap();
        let err = HttpSentimentClient::new(&base, None).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_polarity_serialization() {
        assert_eq!(
            serde_json::to_string(&Polarity::Negative).unwrap(),
            "\"NEGATIVE\""
        );
        assert_eq!(Polarity::Positive.label(), "POSITIVE");
    }
}
