pub mod health;

use axum::{
    http::HeaderValue,
    routing::{get, patch, post, put},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::assist::handlers as assist;
use crate::config::Config;
use crate::editor::handlers as editor;
use crate::export::handlers as export;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document editing
        .route(
            "/api/resume",
            get(editor::handle_get_resume).put(editor::handle_put_resume),
        )
        .route("/api/resume/progress", get(editor::handle_progress))
        .route("/api/resume/template", patch(editor::handle_select_template))
        .route("/api/resume/personal", patch(editor::handle_set_personal))
        .route("/api/resume/summary", put(editor::handle_set_summary))
        .route("/api/resume/skills", put(editor::handle_set_skills))
        .route("/api/resume/experience", post(editor::handle_add_experience))
        .route(
            "/api/resume/experience/:index",
            patch(editor::handle_set_experience_field),
        )
        .route(
            "/api/resume/experience/:index/bullets",
            post(editor::handle_add_bullet),
        )
        .route(
            "/api/resume/experience/:index/bullets/:bullet",
            put(editor::handle_set_bullet),
        )
        .route("/api/resume/education", post(editor::handle_add_education))
        .route(
            "/api/resume/education/:index",
            patch(editor::handle_set_education_field),
        )
        // Templates, preview and export
        .route("/api/templates", get(export::handle_local_templates))
        .route("/api/templates/catalog", get(export::handle_remote_templates))
        .route("/api/preview", get(export::handle_preview))
        .route("/api/export/pdf", post(export::handle_export_pdf))
        .route("/api/export/text", post(export::handle_export_text))
        // Assist
        .route("/api/assist/summary", post(assist::handle_generate_summary))
        .route(
            "/api/assist/experience/:index/bullets",
            post(assist::handle_generate_bullets),
        )
        .route(
            "/api/assist/experience/:index/star",
            post(assist::handle_convert_to_star),
        )
        .route(
            "/api/assist/improve-bullet",
            post(assist::handle_improve_bullet),
        )
        .route("/api/ats/analyze", post(assist::handle_analyze_ats))
        .route(
            "/api/interview/questions",
            post(assist::handle_interview_questions),
        )
        .route(
            "/api/interview/evaluate",
            post(assist::handle_evaluate_answer),
        )
        .with_state(state)
}

/// CORS restricted to the configured origins. Requests from any other origin
/// get no `access-control-allow-origin`, so browsers withhold the response.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin, "Ignoring invalid entry in ALLOWED_ORIGINS");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
