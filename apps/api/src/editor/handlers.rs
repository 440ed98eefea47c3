use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::editor::{EducationField, Editor, ExperienceField, PersonalField};
use crate::errors::AppError;
use crate::models::{ResumeDocument, TemplateId};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FieldUpdate<F> {
    pub field: F,
    pub value: String,
}

#[derive(Deserialize)]
pub struct ValueUpdate {
    pub value: String,
}

#[derive(Deserialize)]
pub struct SkillsUpdate {
    pub text: String,
}

#[derive(Deserialize)]
pub struct TemplateSelection {
    pub template: String,
}

#[derive(Serialize)]
pub struct ProgressResponse {
    pub progress: u8,
}

#[derive(Serialize)]
pub struct Created {
    pub index: usize,
    pub resume: ResumeDocument,
}

/// GET /api/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.store.load())
}

/// PUT /api/resume
pub async fn handle_put_resume(
    State(state): State<AppState>,
    Json(doc): Json<ResumeDocument>,
) -> Result<Json<ResumeDocument>, AppError> {
    let mut editor = Editor::open(state.store.as_ref());
    editor.replace(doc)?;
    Ok(Json(editor.into_document()))
}

/// GET /api/resume/progress
pub async fn handle_progress(State(state): State<AppState>) -> Json<ProgressResponse> {
    let editor = Editor::open(state.store.as_ref());
    Json(ProgressResponse {
        progress: editor.progress(),
    })
}

/// PATCH /api/resume/template
///
/// Unknown ids fall back to the baseline template rather than being rejected.
pub async fn handle_select_template(
    State(state): State<AppState>,
    Json(req): Json<TemplateSelection>,
) -> Result<Json<ResumeDocument>, AppError> {
    let mut editor = Editor::open(state.store.as_ref());
    editor.select_template(TemplateId::resolve(&req.template))?;
    Ok(Json(editor.into_document()))
}

/// PATCH /api/resume/personal
pub async fn handle_set_personal(
    State(state): State<AppState>,
    Json(req): Json<FieldUpdate<PersonalField>>,
) -> Result<Json<ResumeDocument>, AppError> {
    let mut editor = Editor::open(state.store.as_ref());
    editor.set_personal(req.field, req.value)?;
    Ok(Json(editor.into_document()))
}

/// PUT /api/resume/summary
pub async fn handle_set_summary(
    State(state): State<AppState>,
    Json(req): Json<ValueUpdate>,
) -> Result<Json<ResumeDocument>, AppError> {
    let mut editor = Editor::open(state.store.as_ref());
    editor.set_summary(req.value)?;
    Ok(Json(editor.into_document()))
}

/// PUT /api/resume/skills
pub async fn handle_set_skills(
    State(state): State<AppState>,
    Json(req): Json<SkillsUpdate>,
) -> Result<Json<ResumeDocument>, AppError> {
    let mut editor = Editor::open(state.store.as_ref());
    editor.set_skills_text(&req.text)?;
    Ok(Json(editor.into_document()))
}

/// POST /api/resume/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let mut editor = Editor::open(state.store.as_ref());
    let index = editor.add_experience()?;
    Ok((
        StatusCode::CREATED,
        Json(Created {
            index,
            resume: editor.into_document(),
        }),
    ))
}

/// PATCH /api/resume/experience/:index
pub async fn handle_set_experience_field(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<FieldUpdate<ExperienceField>>,
) -> Result<Json<ResumeDocument>, AppError> {
    let mut editor = Editor::open(state.store.as_ref());
    editor.set_experience_field(index, req.field, req.value)?;
    Ok(Json(editor.into_document()))
}

/// POST /api/resume/experience/:index/bullets
pub async fn handle_add_bullet(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let mut editor = Editor::open(state.store.as_ref());
    let position = editor.add_bullet(index)?;
    Ok((
        StatusCode::CREATED,
        Json(Created {
            index: position,
            resume: editor.into_document(),
        }),
    ))
}

/// PUT /api/resume/experience/:index/bullets/:bullet
pub async fn handle_set_bullet(
    State(state): State<AppState>,
    Path((index, bullet)): Path<(usize, usize)>,
    Json(req): Json<ValueUpdate>,
) -> Result<Json<ResumeDocument>, AppError> {
    let mut editor = Editor::open(state.store.as_ref());
    editor.set_bullet(index, bullet, req.value)?;
    Ok(Json(editor.into_document()))
}

/// POST /api/resume/education
pub async fn handle_add_education(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let mut editor = Editor::open(state.store.as_ref());
    let index = editor.add_education()?;
    Ok((
        StatusCode::CREATED,
        Json(Created {
            index,
            resume: editor.into_document(),
        }),
    ))
}

/// PATCH /api/resume/education/:index
pub async fn handle_set_education_field(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<FieldUpdate<EducationField>>,
) -> Result<Json<ResumeDocument>, AppError> {
    let mut editor = Editor::open(state.store.as_ref());
    editor.set_education_field(index, req.field, req.value)?;
    Ok(Json(editor.into_document()))
}
