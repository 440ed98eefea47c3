//! Backend client, the single point of contact with the remote AI/ATS/
//! interview service.
//!
//! No other module talks to the service directly; handlers go through the
//! [`AssistBackend`] trait so tests can substitute a fake.
//!
//! Calls are made once. There is no retry and no client-side timeout: a failed
//! call surfaces its message and the user re-triggers it.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod types;

use types::{
    AtsReport, AtsRequest, BulletsRequest, BulletsResponse, EvaluateRequest, Evaluation,
    ImproveBulletRequest, QuestionsRequest, QuestionsResponse, StarRequest, StarResponse,
    SummaryRequest, SummaryResponse, TemplateCatalog,
};

/// Message used when an error response has no readable JSON body.
const UNREADABLE_ERROR: &str = "Request failed";

#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport failure: connection refused, DNS, broken body.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the service's `error` string, or
    /// `HTTP <status>` when it sent none.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Builds the user-facing message for a non-2xx response.
fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(message) }) => message,
        Ok(ErrorBody { error: None }) => format!("HTTP {}", status.as_u16()),
        Err(_) => UNREADABLE_ERROR.to_string(),
    }
}

/// The remote service contract, one method per endpoint.
#[async_trait]
pub trait AssistBackend: Send + Sync {
    async fn generate_summary(&self, request: &SummaryRequest) -> Result<SummaryResponse, BackendError>;
    async fn generate_bullets(&self, request: &BulletsRequest) -> Result<BulletsResponse, BackendError>;
    async fn improve_bullet(&self, request: &ImproveBulletRequest) -> Result<Value, BackendError>;
    async fn convert_to_star(&self, request: &StarRequest) -> Result<StarResponse, BackendError>;
    async fn analyze_ats(&self, request: &AtsRequest) -> Result<AtsReport, BackendError>;
    async fn templates(&self) -> Result<TemplateCatalog, BackendError>;
    async fn interview_questions(&self, request: &QuestionsRequest) -> Result<QuestionsResponse, BackendError>;
    async fn evaluate_answer(&self, request: &EvaluateRequest) -> Result<Evaluation, BackendError>;
}

/// HTTP implementation of [`AssistBackend`].
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(path, response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> Result<T, BackendError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(status, &body);
            warn!(path, status = status.as_u16(), %message, "Backend call failed");
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(path, bytes = body.len(), "Backend call succeeded");
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl AssistBackend for BackendClient {
    async fn generate_summary(&self, request: &SummaryRequest) -> Result<SummaryResponse, BackendError> {
        self.post("/api/ai/generate-summary", request).await
    }

    async fn generate_bullets(&self, request: &BulletsRequest) -> Result<BulletsResponse, BackendError> {
        self.post("/api/ai/generate-bullets", request).await
    }

    async fn improve_bullet(&self, request: &ImproveBulletRequest) -> Result<Value, BackendError> {
        self.post("/api/ai/improve-bullet", request).await
    }

    async fn convert_to_star(&self, request: &StarRequest) -> Result<StarResponse, BackendError> {
        self.post("/api/ai/convert-to-star", request).await
    }

    async fn analyze_ats(&self, request: &AtsRequest) -> Result<AtsReport, BackendError> {
        self.post("/api/ats/analyze", request).await
    }

    async fn templates(&self) -> Result<TemplateCatalog, BackendError> {
        self.get("/api/templates").await
    }

    async fn interview_questions(&self, request: &QuestionsRequest) -> Result<QuestionsResponse, BackendError> {
        self.post("/api/interview/generate", request).await
    }

    async fn evaluate_answer(&self, request: &EvaluateRequest) -> Result<Evaluation, BackendError> {
        self.post("/api/interview/evaluate", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_uses_service_error() {
        let message = error_message(StatusCode::BAD_REQUEST, r#"{"error": "Job title is required"}"#);
        assert_eq!(message, "Job title is required");
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(error_message(StatusCode::SERVICE_UNAVAILABLE, "{}"), "HTTP 503");
        assert_eq!(error_message(StatusCode::NOT_FOUND, r#"{"error": null}"#), "HTTP 404");
    }

    #[test]
    fn test_error_message_for_unreadable_body() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"),
            UNREADABLE_ERROR
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BackendClient::new("http://localhost:5000/");
        assert_eq!(client.url("/api/templates"), "http://localhost:5000/api/templates");
    }

    #[test]
    fn test_api_error_displays_message_verbatim() {
        let err = BackendError::Api {
            status: 500,
            message: "Model overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "Model overloaded");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_http_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let client = BackendClient::new("http://127.0.0.1:9");
        let err = client.templates().await.unwrap_err();
        assert!(matches!(err, BackendError::Http(_)));
    }
}
