//! Export pipeline.
//!
//! PDF: render (omit-empty) → mount off-screen → capture at 2× → paginate →
//! assemble. Each stage finishes before the next starts; a failure anywhere
//! aborts the whole export and no partial document is returned.
//!
//! Text: a direct serialization of the document, see [`text::export_text`].

pub mod filename;
pub mod handlers;
pub mod paginate;
pub mod pdf;
pub mod text;

use thiserror::Error;
use tracing::info;

use crate::capture::{CaptureError, PreviewFrame, Rasterizer};
use crate::models::{ResumeDocument, TemplateId};
use crate::render::{render_template, RenderOptions};

pub use filename::export_file_name;
pub use paginate::{paginate, RenderedPage};
pub use text::export_text;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("Capture produced no pages")]
    NoPages,

    #[error("PDF assembly failed: {0}")]
    Assemble(#[from] std::io::Error),

    #[error("Export task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// A finished download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Exports `doc` as an A4 PDF using `template`. `options.mode` is ignored:
/// exports always omit empty sections.
pub async fn export_pdf(
    doc: &ResumeDocument,
    template: TemplateId,
    options: &RenderOptions,
    rasterizer: &Rasterizer,
) -> Result<ExportArtifact, ExportError> {
    let options = RenderOptions {
        logo_href: options.logo_href.clone(),
        ..RenderOptions::export()
    };

    let mut frame = PreviewFrame::new();
    frame.mount(render_template(doc, template, &options));
    let raster = rasterizer.capture(frame.target()).await?;

    let title = format!("{} Resume", doc.display_name().unwrap_or("Untitled"));
    let (bytes, page_count) = tokio::task::spawn_blocking(move || -> Result<_, ExportError> {
        let pages = paginate(&raster);
        if pages.is_empty() {
            return Err(ExportError::NoPages);
        }
        let bytes = pdf::assemble_pdf(&pages, &title)?;
        Ok((bytes, pages.len()))
    })
    .await??;

    let file_name = export_file_name(doc, "pdf");
    info!(
        template = template.as_str(),
        pages = page_count,
        bytes = bytes.len(),
        file = %file_name,
        "PDF export complete"
    );

    Ok(ExportArtifact {
        file_name,
        content_type: "application/pdf",
        bytes,
    })
}

/// Exports `doc` as plain text. Never fails.
pub fn export_plain_text(doc: &ResumeDocument) -> ExportArtifact {
    let text = export_text(doc);
    let file_name = export_file_name(doc, "txt");
    info!(bytes = text.len(), file = %file_name, "Text export complete");
    ExportArtifact {
        file_name,
        content_type: "text/plain; charset=utf-8",
        bytes: text.into_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use usvg::fontdb;

    use super::*;
    use crate::models::{ExperienceEntry, PersonalInfo};

    fn jane_doe() -> ResumeDocument {
        ResumeDocument {
            personal: PersonalInfo {
                name: "Jane Doe".to_string(),
                title: "Frontend Engineer".to_string(),
                ..PersonalInfo::default()
            },
            skills: vec!["React".to_string(), "CSS".to_string()],
            experiences: vec![ExperienceEntry {
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                duration: "2022–Present".to_string(),
                bullets: vec!["Shipped X".to_string(), "Improved Y".to_string()],
            }],
            education: vec![],
            ..ResumeDocument::default()
        }
    }

    fn rasterizer() -> Rasterizer {
        Rasterizer::with_fontdb(fontdb::Database::new(), None)
    }

    #[tokio::test]
    async fn test_pdf_export_end_to_end() {
        let artifact = export_pdf(
            &jane_doe(),
            TemplateId::Professional,
            &RenderOptions::export(),
            &rasterizer(),
        )
        .await
        .unwrap();

        assert_eq!(artifact.file_name, "Jane_Doe_Resume.pdf");
        assert_eq!(artifact.content_type, "application/pdf");
        assert!(artifact.bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_one_page_document_is_one_pdf_page() {
        for template in TemplateId::ALL {
            let artifact = export_pdf(&jane_doe(), template, &RenderOptions::export(), &rasterizer())
                .await
                .unwrap();
            let count = artifact
                .bytes
                .windows(b"/Count 1".len())
                .filter(|w| *w == b"/Count 1")
                .count();
            assert_eq!(count, 1, "{template}");
        }
    }

    #[tokio::test]
    async fn test_control_characters_in_pasted_text_still_export() {
        let mut doc = jane_doe();
        doc.summary = "Pasted from Word\u{0001}with a control char".to_string();
        doc.experiences[0].bullets[0] = "Tab\tand form feed\u{000C} survive".to_string();
        let artifact = export_pdf(&doc, TemplateId::Classy, &RenderOptions::export(), &rasterizer())
            .await
            .unwrap();
        assert!(artifact.bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_text_artifact() {
        let artifact = export_plain_text(&ResumeDocument::default());
        assert_eq!(artifact.file_name, "Resume_Resume.txt");
        assert!(artifact.content_type.starts_with("text/plain"));
    }
}
