//! Per-section visibility and field resolution, shared by every template.
//!
//! A template asks two questions here: "does this section render at all?" and
//! "what text stands in for this field?". The answers depend only on the
//! document and the [`RenderMode`], so all four templates agree on them.

use crate::models::resume::is_blank;
use crate::models::{EducationEntry, ExperienceEntry, ResumeDocument};
use crate::render::flow::TextStyle;
use crate::render::RenderMode;

/// Stand-in shown for a document with no experience entries in preview mode.
static BLANK_EXPERIENCE: ExperienceEntry = ExperienceEntry {
    company: String::new(),
    role: String::new(),
    duration: String::new(),
    bullets: Vec::new(),
};

static BLANK_EDUCATION: EducationEntry = EducationEntry {
    school: String::new(),
    degree: String::new(),
    field: String::new(),
    graduation_year: String::new(),
};

/// A field as it will be painted: the document's own text, or placeholder copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shown<'a> {
    pub text: &'a str,
    pub placeholder: bool,
}

impl<'a> Shown<'a> {
    pub fn value(text: &'a str) -> Self {
        Self {
            text,
            placeholder: false,
        }
    }

    pub fn style(&self, base: TextStyle) -> TextStyle {
        if self.placeholder {
            base.placeholder()
        } else {
            base
        }
    }
}

#[derive(Clone, Copy)]
pub struct Sections<'a> {
    pub doc: &'a ResumeDocument,
    pub mode: RenderMode,
}

impl<'a> Sections<'a> {
    pub fn new(doc: &'a ResumeDocument, mode: RenderMode) -> Self {
        Self { doc, mode }
    }

    fn placeholders(&self) -> bool {
        self.mode == RenderMode::Placeholder
    }

    /// Resolves `value`: itself when non-blank, `placeholder` in preview mode,
    /// otherwise nothing.
    pub fn field(&self, value: &'a str, placeholder: &'a str) -> Option<Shown<'a>> {
        if !is_blank(value) {
            Some(Shown::value(value.trim()))
        } else if self.placeholders() {
            Some(Shown {
                text: placeholder,
                placeholder: true,
            })
        } else {
            None
        }
    }

    /// Like [`Sections::field`] but never shows placeholder copy. Used for
    /// optional extras such as the LinkedIn handle.
    pub fn optional(&self, value: &'a str) -> Option<Shown<'a>> {
        (!is_blank(value)).then(|| Shown::value(value.trim()))
    }

    /// Joins the parts that resolved to something, e.g. `"Acme | 2022"`.
    /// The result is placeholder-styled only if every part is a placeholder.
    pub fn joined(&self, parts: &[Option<Shown<'a>>], sep: &str) -> Option<(String, bool)> {
        let shown: Vec<&Shown<'a>> = parts.iter().flatten().collect();
        if shown.is_empty() {
            return None;
        }
        let text = shown.iter().map(|s| s.text).collect::<Vec<_>>().join(sep);
        let placeholder = shown.iter().all(|s| s.placeholder);
        Some((text, placeholder))
    }

    // ── section visibility ──────────────────────────────────────────────────

    pub fn show_name(&self) -> bool {
        self.doc.display_name().is_some() || self.placeholders()
    }

    pub fn show_contact(&self) -> bool {
        let p = &self.doc.personal;
        self.placeholders()
            || [&p.email, &p.phone, &p.location, &p.linkedin]
                .iter()
                .any(|v| !is_blank(v))
    }

    pub fn show_summary(&self) -> bool {
        self.doc.has_summary() || self.placeholders()
    }

    pub fn show_skills(&self) -> bool {
        !self.doc.visible_skills().is_empty() || self.placeholders()
    }

    pub fn show_experience(&self) -> bool {
        self.doc.visible_experiences().next().is_some() || self.placeholders()
    }

    pub fn show_education(&self) -> bool {
        self.doc.visible_education().next().is_some() || self.placeholders()
    }

    // ── entries ─────────────────────────────────────────────────────────────

    /// Entries to lay out: non-empty ones when omitting, every entry in
    /// preview mode (one blank stand-in if there are none).
    pub fn experiences(&self) -> Vec<&'a ExperienceEntry> {
        if self.placeholders() {
            if self.doc.experiences.is_empty() {
                vec![&BLANK_EXPERIENCE]
            } else {
                self.doc.experiences.iter().collect()
            }
        } else {
            self.doc.visible_experiences().collect()
        }
    }

    pub fn education(&self) -> Vec<&'a EducationEntry> {
        if self.placeholders() {
            if self.doc.education.is_empty() {
                vec![&BLANK_EDUCATION]
            } else {
                self.doc.education.iter().collect()
            }
        } else {
            self.doc.visible_education().collect()
        }
    }
}
