//! Plain-text export: a flat UTF-8 rendition of the document, built straight
//! from the data with no layout involved.

use std::fmt::Write as _;

use crate::models::resume::is_blank;
use crate::models::ResumeDocument;

const SEPARATOR_WIDTH: usize = 50;

/// Fixed section order: name, title, separator, SUMMARY, SKILLS, EXPERIENCE.
/// Sections with no content are left out entirely.
pub fn export_text(doc: &ResumeDocument) -> String {
    let mut out = String::new();
    let p = &doc.personal;

    if let Some(name) = doc.display_name() {
        let _ = writeln!(out, "{name}");
    }
    if !is_blank(&p.title) {
        let _ = writeln!(out, "{}", p.title.trim());
    }
    let _ = write!(out, "\n{}\n\n", "=".repeat(SEPARATOR_WIDTH));

    if doc.has_summary() {
        let _ = write!(out, "SUMMARY\n{}\n\n", doc.summary.trim());
    }

    let skills = doc.visible_skills();
    if !skills.is_empty() {
        let _ = write!(out, "SKILLS\n{}\n\n", skills.join(", "));
    }

    let mut experiences = doc.visible_experiences().peekable();
    if experiences.peek().is_some() {
        out.push_str("EXPERIENCE\n\n");
        for exp in experiences {
            let role = if is_blank(&exp.role) { "Position" } else { exp.role.trim() };
            let company = if is_blank(&exp.company) { "Company" } else { exp.company.trim() };
            let _ = writeln!(out, "{role} — {company}");
            if !is_blank(&exp.duration) {
                let _ = writeln!(out, "{}", exp.duration.trim());
            }
            for bullet in exp.visible_bullets() {
                let _ = writeln!(out, "• {bullet}");
            }
            out.push('\n');
        }
    }

    out
}
