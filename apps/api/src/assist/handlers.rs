use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::assist::{self, AssistError, AtsAnalysis, RatedEvaluation};
use crate::backend::types::{ImproveBulletRequest, InterviewQuestion, InterviewType};
use crate::errors::AppError;
use crate::models::ResumeDocument;
use crate::state::AppState;

impl From<AssistError> for AppError {
    fn from(err: AssistError) -> Self {
        match err {
            AssistError::Validation(msg) => AppError::Validation(msg.to_string()),
            AssistError::Editor(e) => e.into(),
            backend @ AssistError::Backend { .. } => AppError::Backend(backend.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ToneRequest {
    pub tone: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalyzeRequest {
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestionsRequest {
    pub job_title: String,
    pub job_description: Option<String>,
    pub interview_type: Option<InterviewType>,
    pub count: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct InterviewQuestionsResponse {
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateAnswerRequest {
    pub question: String,
    pub user_answer: String,
    pub question_type: Option<String>,
}

/// POST /api/assist/summary
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    body: Option<Json<ToneRequest>>,
) -> Result<Json<ResumeDocument>, AppError> {
    let tone = body.and_then(|Json(req)| req.tone);
    let doc = assist::generate_summary(state.backend.as_ref(), state.store.as_ref(), tone).await?;
    Ok(Json(doc))
}

/// POST /api/assist/experience/:index/bullets
pub async fn handle_generate_bullets(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    body: Option<Json<ToneRequest>>,
) -> Result<Json<ResumeDocument>, AppError> {
    let tone = body.and_then(|Json(req)| req.tone);
    let doc =
        assist::generate_bullets(state.backend.as_ref(), state.store.as_ref(), index, tone).await?;
    Ok(Json(doc))
}

/// POST /api/assist/experience/:index/star
pub async fn handle_convert_to_star(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ResumeDocument>, AppError> {
    let doc = assist::convert_to_star(state.backend.as_ref(), state.store.as_ref(), index).await?;
    Ok(Json(doc))
}

/// POST /api/assist/improve-bullet
pub async fn handle_improve_bullet(
    State(state): State<AppState>,
    Json(req): Json<ImproveBulletRequest>,
) -> Result<Json<Value>, AppError> {
    let improved = assist::improve_bullet(state.backend.as_ref(), &req).await?;
    Ok(Json(improved))
}

/// POST /api/ats/analyze
pub async fn handle_analyze_ats(
    State(state): State<AppState>,
    Json(req): Json<AtsAnalyzeRequest>,
) -> Result<Json<AtsAnalysis>, AppError> {
    let analysis = assist::analyze_ats(
        state.backend.as_ref(),
        state.store.as_ref(),
        &req.job_description,
    )
    .await?;
    Ok(Json(analysis))
}

/// POST /api/interview/questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(req): Json<InterviewQuestionsRequest>,
) -> Result<Json<InterviewQuestionsResponse>, AppError> {
    let questions = assist::interview_questions(
        state.backend.as_ref(),
        &req.job_title,
        req.job_description,
        req.interview_type,
        req.count,
    )
    .await?;
    Ok(Json(InterviewQuestionsResponse { questions }))
}

/// POST /api/interview/evaluate
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(req): Json<EvaluateAnswerRequest>,
) -> Result<Json<RatedEvaluation>, AppError> {
    let rated = assist::evaluate_answer(
        state.backend.as_ref(),
        &req.question,
        &req.user_answer,
        req.question_type,
    )
    .await?;
    Ok(Json(rated))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{http::StatusCode, response::IntoResponse};

    use super::*;
    use crate::store::MemoryStore;
    use crate::testing::{test_state, FakeBackend};

    #[tokio::test]
    async fn test_validation_maps_to_400() {
        let state = test_state(Arc::new(MemoryStore::new()), Arc::new(FakeBackend::default()));
        let err = handle_interview_questions(
            State(state),
            Json(InterviewQuestionsRequest {
                job_title: " ".to_string(),
                job_description: None,
                interview_type: None,
                count: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_backend_failure_maps_to_502_with_prefix() {
        let state = test_state(
            Arc::new(MemoryStore::new()),
            Arc::new(FakeBackend::failing("Model overloaded")),
        );
        let err = handle_generate_summary(State(state), None).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate summary: Model overloaded");
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_unknown_experience_is_404() {
        let state = test_state(Arc::new(MemoryStore::new()), Arc::new(FakeBackend::default()));
        let err = handle_convert_to_star(State(state), Path(7)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_improve_bullet_passthrough() {
        let state = test_state(Arc::new(MemoryStore::new()), Arc::new(FakeBackend::default()));
        let Json(value) = handle_improve_bullet(
            State(state),
            Json(ImproveBulletRequest {
                bullet_point: "Reduced costs".to_string(),
                add_metrics: true,
            }),
        )
        .await
        .unwrap();
        assert_eq!(value["improved"], "Reduced costs by 25%");
    }
}
