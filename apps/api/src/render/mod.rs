//! Template Renderer: pure mapping from a résumé document and a template id
//! to a visual layout.
//!
//! Same input, same output: no hidden state, no I/O. The layout is a display
//! list (`elements`) plus its SVG serialization (`svg`), which is what the
//! preview shows and what the rasterizer paints.
//!
//! # Render modes
//! - [`RenderMode::OmitEmpty`]: export. A section whose backing data is empty
//!   is not emitted at all, heading included.
//! - [`RenderMode::Placeholder`]: live preview while editing. Empty fields show
//!   muted guidance copy instead.
//!
//! Blank bullets are dropped in both modes.

pub mod catalog;
pub mod display;
pub mod flow;
pub mod sections;
mod templates;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::{PAGE_HEIGHT_PX, PAGE_WIDTH_PX};
use crate::models::{ResumeDocument, TemplateId};

pub use display::{Element, TextRole, TextRun};

// ────────────────────────────────────────────────────────────────────────────
// Options and output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    OmitEmpty,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: RenderMode,
    /// Optional logo painted in the top-right corner. Any href the rasterizer
    /// can resolve (file path relative to the assets dir, `data:` URI); anything
    /// else is skipped at capture time.
    pub logo_href: Option<String>,
}

impl RenderOptions {
    /// Options for an exported document: empty sections omitted.
    pub fn export() -> Self {
        Self {
            mode: RenderMode::OmitEmpty,
            logo_href: None,
        }
    }

    /// Options for the live editing preview: placeholders shown.
    pub fn preview() -> Self {
        Self {
            mode: RenderMode::Placeholder,
            logo_href: None,
        }
    }

    pub fn with_logo(mut self, href: impl Into<String>) -> Self {
        self.logo_href = Some(href.into());
        self
    }
}

/// A rendered template: page-width layout, at least one page tall.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedLayout {
    pub template: TemplateId,
    pub width: f32,
    pub height: f32,
    pub elements: Vec<Element>,
    pub svg: String,
}

impl RenderedLayout {
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Section headings in paint order.
    pub fn headings(&self) -> Vec<&str> {
        self.text_runs()
            .filter(|r| r.role == TextRole::Heading)
            .map(|r| r.content.as_str())
            .collect()
    }

    /// True if any heading contains `word`, ignoring case.
    pub fn has_heading(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.headings()
            .iter()
            .any(|h| h.to_lowercase().contains(&word))
    }

    /// True if any painted text run contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_runs().any(|r| r.content.contains(needle))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry points
// ────────────────────────────────────────────────────────────────────────────

const LOGO_SIZE: f32 = 56.0;
const LOGO_MARGIN: f32 = 20.0;

/// Renders `doc` with the given template.
pub fn render_template(
    doc: &ResumeDocument,
    template: TemplateId,
    options: &RenderOptions,
) -> RenderedLayout {
    let (mut elements, content_bottom) = match template {
        TemplateId::Professional => templates::professional::layout(doc, options.mode),
        TemplateId::Classy => templates::classy::layout(doc, options.mode),
        TemplateId::Simple => templates::simple::layout(doc, options.mode),
        TemplateId::Stylish => templates::stylish::layout(doc, options.mode),
    };

    if let Some(href) = &options.logo_href {
        elements.push(Element::Image {
            x: PAGE_WIDTH_PX - LOGO_MARGIN - LOGO_SIZE,
            y: LOGO_MARGIN,
            width: LOGO_SIZE,
            height: LOGO_SIZE,
            href: href.clone(),
        });
    }

    let width = PAGE_WIDTH_PX;
    let height = content_bottom.ceil().max(PAGE_HEIGHT_PX);
    let svg = display::to_svg(width, height, &elements);

    debug!(
        template = template.as_str(),
        mode = ?options.mode,
        elements = elements.len(),
        height,
        "Rendered template"
    );

    RenderedLayout {
        template,
        width,
        height,
        elements,
        svg,
    }
}

/// Renders with a template named by string. Unknown names fall back to the
/// baseline template (logged), never an error.
pub fn render_named(doc: &ResumeDocument, template_id: &str, options: &RenderOptions) -> RenderedLayout {
    render_template(doc, TemplateId::resolve(template_id), options)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
