//! Test doubles shared by handler and flow tests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use usvg::fontdb;

use crate::backend::types::{
    AtsReport, AtsRequest, BulletsRequest, BulletsResponse, EvaluateRequest, Evaluation,
    ImproveBulletRequest, InterviewQuestion, QuestionsRequest, QuestionsResponse, StarRequest,
    StarResponse, SummaryRequest, SummaryResponse, TemplateCatalog,
};
use crate::backend::{AssistBackend, BackendError};
use crate::capture::Rasterizer;
use crate::config::Config;
use crate::render::catalog::local_catalog;
use crate::state::AppState;
use crate::store::DocumentStore;

/// Canned backend that records every request body it receives, keyed by
/// endpoint name. `failing` makes every call return an API error.
#[derive(Default)]
pub struct FakeBackend {
    failure: Option<String>,
    requests: Mutex<Vec<(&'static str, Value)>>,
}

impl FakeBackend {
    pub const SUMMARY: &'static str = "Seasoned engineer who ships.";

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn bullets() -> Vec<String> {
        vec!["Led migration to Rust".to_string(), "Cut p99 latency by 40%".to_string()]
    }

    pub fn star_bullets() -> Vec<String> {
        vec!["Situation: legacy build; Action: rewrote it; Result: 3x faster".to_string()]
    }

    /// The most recent body sent to `endpoint`.
    pub fn last_request(&self, endpoint: &str) -> Option<Value> {
        let requests = self.requests.lock().unwrap();
        requests
            .iter()
            .rev()
            .find(|(name, _)| *name == endpoint)
            .map(|(_, body)| body.clone())
    }

    fn record<T: Serialize>(&self, endpoint: &'static str, request: &T) -> Result<(), BackendError> {
        let body = serde_json::to_value(request)?;
        self.requests.lock().unwrap().push((endpoint, body));
        match &self.failure {
            Some(message) => Err(BackendError::Api {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AssistBackend for FakeBackend {
    async fn generate_summary(&self, request: &SummaryRequest) -> Result<SummaryResponse, BackendError> {
        self.record("generate-summary", request)?;
        Ok(SummaryResponse {
            summary: Self::SUMMARY.to_string(),
        })
    }

    async fn generate_bullets(&self, request: &BulletsRequest) -> Result<BulletsResponse, BackendError> {
        self.record("generate-bullets", request)?;
        Ok(BulletsResponse {
            bullets: Self::bullets(),
        })
    }

    async fn improve_bullet(&self, request: &ImproveBulletRequest) -> Result<Value, BackendError> {
        self.record("improve-bullet", request)?;
        Ok(json!({ "improved": format!("{} by 25%", request.bullet_point) }))
    }

    async fn convert_to_star(&self, request: &StarRequest) -> Result<StarResponse, BackendError> {
        self.record("convert-to-star", request)?;
        Ok(StarResponse {
            star_bullets: Self::star_bullets(),
        })
    }

    async fn analyze_ats(&self, request: &AtsRequest) -> Result<AtsReport, BackendError> {
        self.record("analyze", request)?;
        Ok(AtsReport {
            overall_score: Some(82.0),
            matched_keywords: vec!["rust".to_string()],
            missing_keywords: vec!["kubernetes".to_string()],
            ..AtsReport::default()
        })
    }

    async fn templates(&self) -> Result<TemplateCatalog, BackendError> {
        self.record("templates", &Value::Null)?;
        Ok(TemplateCatalog {
            templates: local_catalog(),
        })
    }

    async fn interview_questions(&self, request: &QuestionsRequest) -> Result<QuestionsResponse, BackendError> {
        self.record("interview-generate", request)?;
        let questions = (1..=request.count)
            .map(|n| InterviewQuestion {
                question: format!("Question {n} for {}?", request.job_title),
                kind: "behavioral".to_string(),
                ..InterviewQuestion::default()
            })
            .collect();
        Ok(QuestionsResponse { questions })
    }

    async fn evaluate_answer(&self, request: &EvaluateRequest) -> Result<Evaluation, BackendError> {
        self.record("interview-evaluate", request)?;
        Ok(Evaluation {
            score: 6.0,
            feedback: "Add a measurable result.".to_string(),
            ..Evaluation::default()
        })
    }
}

pub fn test_config() -> Config {
    Config {
        backend_url: "http://127.0.0.1:9".to_string(),
        data_dir: PathBuf::from(".vitae-test"),
        fonts_dir: None,
        resources_dir: None,
        allowed_origins: vec!["http://localhost:3000".to_string()],
        host: "127.0.0.1".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
    }
}

/// App state over the given store and backend, with an empty font database.
pub fn test_state(store: Arc<dyn DocumentStore>, backend: Arc<dyn AssistBackend>) -> AppState {
    AppState {
        store,
        backend,
        rasterizer: Rasterizer::with_fontdb(fontdb::Database::new(), None),
        config: test_config(),
    }
}
