use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::backend::types::TemplateCatalog;
use crate::capture::PreviewFrame;
use crate::errors::AppError;
use crate::export::{self, ExportArtifact};
use crate::models::TemplateId;
use crate::render::catalog::local_catalog;
use crate::render::{render_named, render_template, RenderMode, RenderOptions};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    /// Template id; the stored selection when absent. Unknown ids fall back
    /// to the baseline.
    pub template: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    pub template: Option<String>,
    /// Show placeholders for empty fields. Defaults to true.
    pub placeholders: Option<bool>,
    pub logo: Option<String>,
}

fn pick_template(requested: Option<&str>, stored: TemplateId) -> TemplateId {
    requested.map(TemplateId::resolve).unwrap_or(stored)
}

fn with_logo(options: RenderOptions, logo: Option<String>) -> RenderOptions {
    match logo.filter(|l| !l.trim().is_empty()) {
        Some(href) => options.with_logo(href),
        None => options,
    }
}

/// `attachment` disposition with an ASCII fallback name and the exact UTF-8
/// name in `filename*`. Runs of replaced characters become a single `_`.
fn content_disposition(file_name: &str) -> String {
    let mut ascii = String::with_capacity(file_name.len());
    for c in file_name.chars() {
        let c = if c.is_ascii_graphic() && c != '"' && c != '\\' { c } else { '_' };
        if !(c == '_' && ascii.ends_with('_')) {
            ascii.push(c);
        }
    }
    let ascii = ascii.trim_start_matches('_');
    let mut encoded = String::with_capacity(file_name.len());
    for byte in file_name.bytes() {
        if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    format!("attachment; filename=\"{ascii}\"; filename*=UTF-8''{encoded}")
}

fn download(artifact: ExportArtifact) -> Response {
    (
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&artifact.file_name),
            ),
        ],
        artifact.bytes,
    )
        .into_response()
}

/// GET /api/preview
///
/// The framed preview as SVG: page chrome around the rendered template.
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Result<Response, AppError> {
    let doc = state.store.load();
    let mode = if query.placeholders.unwrap_or(true) {
        RenderMode::Placeholder
    } else {
        RenderMode::OmitEmpty
    };
    let options = with_logo(
        RenderOptions {
            mode,
            logo_href: None,
        },
        query.logo,
    );

    let layout = match query.template.as_deref() {
        Some(name) => render_named(&doc, name, &options),
        None => render_template(&doc, doc.selected_template, &options),
    };
    let mut frame = PreviewFrame::new();
    frame.mount(layout);
    let svg = frame
        .to_svg()
        .ok_or_else(|| anyhow::anyhow!("preview frame has nothing mounted"))?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}

/// POST /api/export/pdf
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let doc = state.store.load();
    let template = pick_template(query.template.as_deref(), doc.selected_template);
    let options = with_logo(RenderOptions::export(), query.logo);

    info!(template = template.as_str(), "PDF export requested");
    let artifact = export::export_pdf(&doc, template, &options, &state.rasterizer).await?;
    Ok(download(artifact))
}

/// POST /api/export/text
pub async fn handle_export_text(State(state): State<AppState>) -> Response {
    let doc = state.store.load();
    download(export::export_plain_text(&doc))
}

/// GET /api/templates
pub async fn handle_local_templates() -> Json<TemplateCatalog> {
    Json(TemplateCatalog {
        templates: local_catalog(),
    })
}

/// GET /api/templates/catalog
pub async fn handle_remote_templates(
    State(state): State<AppState>,
) -> Result<Json<TemplateCatalog>, AppError> {
    let catalog = state
        .backend
        .templates()
        .await
        .map_err(|e| AppError::Backend(format!("Failed to load templates: {e}")))?;
    Ok(Json(catalog))
}
