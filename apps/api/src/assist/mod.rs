//! Assist flows: AI writing help, ATS analysis and interview practice.
//!
//! Each flow validates its input locally, makes exactly one backend call and,
//! for the writing flows, stores the result into the document through the
//! [`Editor`]. Nothing is stored when the call fails.

pub mod handlers;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::backend::types::{
    AtsReport, AtsRequest, BulletsRequest, EvaluateRequest, Evaluation, ImproveBulletRequest,
    InterviewQuestion, InterviewType, QuestionsRequest, ScoreBand, StarRequest, SummaryRequest,
    DEFAULT_TONE,
};
use crate::backend::{AssistBackend, BackendError};
use crate::editor::{Editor, EditorError};
use crate::models::resume::is_blank;
use crate::models::ResumeDocument;
use crate::store::DocumentStore;

pub const DEFAULT_QUESTION_COUNT: u32 = 5;
pub const DEFAULT_QUESTION_TYPE: &str = "behavioral";

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("{0}")]
    Validation(&'static str),

    /// `action` prefixes the backend message, e.g.
    /// "Failed to generate summary: Model overloaded".
    #[error("{action}: {source}")]
    Backend {
        action: &'static str,
        source: BackendError,
    },

    #[error(transparent)]
    Editor(#[from] EditorError),
}

fn backend_failure(action: &'static str) -> impl FnOnce(BackendError) -> AssistError {
    move |source| AssistError::Backend { action, source }
}

fn tone_or_default(tone: Option<String>) -> String {
    tone.filter(|t| !is_blank(t))
        .unwrap_or_else(|| DEFAULT_TONE.to_string())
}

fn entry_index_error(index: usize) -> EditorError {
    EditorError::NoSuchEntry {
        section: "experience",
        index,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Writing assistance
// ────────────────────────────────────────────────────────────────────────────

/// Generates a summary from the stored name, title and skills, and stores it.
pub async fn generate_summary(
    backend: &dyn AssistBackend,
    store: &dyn DocumentStore,
    tone: Option<String>,
) -> Result<ResumeDocument, AssistError> {
    let doc = store.load();
    let request = SummaryRequest {
        full_name: doc.personal.name.clone(),
        title: doc.personal.title.clone(),
        skills: doc.visible_skills().into_iter().map(str::to_string).collect(),
        tone: tone_or_default(tone),
    };

    let response = backend
        .generate_summary(&request)
        .await
        .map_err(backend_failure("Failed to generate summary"))?;

    let mut editor = Editor::open(store);
    editor.set_summary(response.summary)?;
    info!("Stored generated summary");
    Ok(editor.into_document())
}

/// Generates bullets for experience `index` and replaces its bullets.
pub async fn generate_bullets(
    backend: &dyn AssistBackend,
    store: &dyn DocumentStore,
    index: usize,
    tone: Option<String>,
) -> Result<ResumeDocument, AssistError> {
    let doc = store.load();
    let entry = doc.experiences.get(index).ok_or_else(|| entry_index_error(index))?;
    if is_blank(&entry.role) || is_blank(&entry.company) {
        return Err(AssistError::Validation("Please fill in role and company first"));
    }

    let existing: Vec<&str> = entry.visible_bullets().collect();
    let responsibilities = if existing.is_empty() {
        "General responsibilities".to_string()
    } else {
        existing.join(". ")
    };

    let request = BulletsRequest {
        job_title: entry.role.clone(),
        company: entry.company.clone(),
        responsibilities,
        tone: tone_or_default(tone),
    };
    let response = backend
        .generate_bullets(&request)
        .await
        .map_err(backend_failure("Failed to generate bullets"))?;

    let mut editor = Editor::open(store);
    editor.replace_bullets(index, response.bullets)?;
    info!(index, "Stored generated bullets");
    Ok(editor.into_document())
}

/// Rewrites the bullets of experience `index` in STAR form.
pub async fn convert_to_star(
    backend: &dyn AssistBackend,
    store: &dyn DocumentStore,
    index: usize,
) -> Result<ResumeDocument, AssistError> {
    let doc = store.load();
    let entry = doc.experiences.get(index).ok_or_else(|| entry_index_error(index))?;

    let request = StarRequest {
        experience: format!("{} at {}", entry.role, entry.company),
        bullets: entry.visible_bullets().map(str::to_string).collect(),
    };
    let response = backend
        .convert_to_star(&request)
        .await
        .map_err(backend_failure("Failed to convert to STAR format"))?;

    let mut editor = Editor::open(store);
    editor.replace_bullets(index, response.star_bullets)?;
    info!(index, "Stored STAR bullets");
    Ok(editor.into_document())
}

pub async fn improve_bullet(
    backend: &dyn AssistBackend,
    request: &ImproveBulletRequest,
) -> Result<Value, AssistError> {
    if is_blank(&request.bullet_point) {
        return Err(AssistError::Validation("Please enter a bullet point"));
    }
    backend
        .improve_bullet(request)
        .await
        .map_err(backend_failure("Failed to improve bullet"))
}

// ────────────────────────────────────────────────────────────────────────────
// ATS analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysis {
    #[serde(flatten)]
    pub report: AtsReport,
    /// `overallScore`, or `score` when the service only sent that.
    pub headline_score: f64,
    pub band: ScoreBand,
}

/// Scores the stored document against a job description.
pub async fn analyze_ats(
    backend: &dyn AssistBackend,
    store: &dyn DocumentStore,
    job_description: &str,
) -> Result<AtsAnalysis, AssistError> {
    if is_blank(job_description) {
        return Err(AssistError::Validation("Please paste a job description"));
    }
    let doc = store.load();
    if doc == ResumeDocument::default() {
        return Err(AssistError::Validation(
            "No resume found. Please create a resume in the Editor first.",
        ));
    }

    let request = AtsRequest {
        resume_data: doc,
        job_description: job_description.to_string(),
    };
    let report = backend
        .analyze_ats(&request)
        .await
        .map_err(backend_failure("Analysis failed"))?;

    let headline_score = report.headline_score();
    info!(score = headline_score, "ATS analysis complete");
    Ok(AtsAnalysis {
        band: ScoreBand::for_percent(headline_score),
        headline_score,
        report,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Interview practice
// ────────────────────────────────────────────────────────────────────────────

pub async fn interview_questions(
    backend: &dyn AssistBackend,
    job_title: &str,
    job_description: Option<String>,
    interview_type: Option<InterviewType>,
    count: Option<u32>,
) -> Result<Vec<InterviewQuestion>, AssistError> {
    if is_blank(job_title) {
        return Err(AssistError::Validation("Please enter a job title"));
    }

    let request = QuestionsRequest {
        job_title: job_title.trim().to_string(),
        job_description: job_description.filter(|d| !is_blank(d)),
        interview_type: interview_type.unwrap_or_default(),
        count: count.unwrap_or(DEFAULT_QUESTION_COUNT),
    };
    let response = backend
        .interview_questions(&request)
        .await
        .map_err(backend_failure("Failed to generate questions"))?;
    Ok(response.questions)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedEvaluation {
    #[serde(flatten)]
    pub evaluation: Evaluation,
    pub band: ScoreBand,
}

pub async fn evaluate_answer(
    backend: &dyn AssistBackend,
    question: &str,
    answer: &str,
    question_type: Option<String>,
) -> Result<RatedEvaluation, AssistError> {
    if is_blank(answer) {
        return Err(AssistError::Validation("Please write your answer first"));
    }

    let request = EvaluateRequest {
        question: question.to_string(),
        user_answer: answer.to_string(),
        question_type: question_type
            .filter(|t| !is_blank(t))
            .unwrap_or_else(|| DEFAULT_QUESTION_TYPE.to_string()),
    };
    let evaluation = backend
        .evaluate_answer(&request)
        .await
        .map_err(backend_failure("Failed to evaluate answer"))?;

    Ok(RatedEvaluation {
        band: ScoreBand::for_answer(evaluation.score),
        evaluation,
    })
}
