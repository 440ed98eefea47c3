//! Single-column chronological: name on the left with contact stacked on the
//! right, a headline summary without a heading, then skills, work history and
//! education.

use super::{stack, Layout};
use crate::layout::{FontFamily, PAGE_WIDTH_PX};
use crate::models::ResumeDocument;
use crate::render::display::{Color, TextRole};
use crate::render::flow::{Column, TextStyle};
use crate::render::sections::Sections;
use crate::render::RenderMode;

const MARGIN: f32 = 48.0;
const HEADER_SPLIT: f32 = 0.6;

const NAME: TextStyle = TextStyle::new(30.0, Color::INK, TextRole::Name).bold();
const TITLE: TextStyle = TextStyle::new(14.0, Color::MUTED, TextRole::Title);
const CONTACT: TextStyle = TextStyle::new(12.0, Color::MUTED, TextRole::Detail);
const HEADLINE: TextStyle = TextStyle::new(14.0, Color::INK, TextRole::Body);
const HEADING: TextStyle = TextStyle::new(16.0, Color::INK, TextRole::Heading).bold();
const BODY: TextStyle = TextStyle::new(12.0, Color::INK, TextRole::Body);
const DATES: TextStyle = TextStyle::new(12.0, Color::MUTED, TextRole::Detail);

fn heading(col: &mut Column, text: &str) {
    col.gap(18.0);
    col.text(text, HEADING);
    col.gap(4.0);
}

pub fn layout(doc: &ResumeDocument, mode: RenderMode) -> Layout {
    let s = Sections::new(doc, mode);
    let p = &doc.personal;
    let width = PAGE_WIDTH_PX - 2.0 * MARGIN;
    let top = 44.0;

    // ── header ──────────────────────────────────────────────────────────────
    let name_w = width * HEADER_SPLIT;
    let mut name_col = Column::new(MARGIN, top, name_w, FontFamily::Inter);
    name_col.field(s.field(&p.name, "YOUR NAME"), NAME);
    name_col.field(s.field(&p.title, "Your Professional Title"), TITLE);

    let mut contact = Column::new(MARGIN + name_w, top + 4.0, width - name_w, FontFamily::Inter);
    for shown in [
        s.field(&p.location, "City, State"),
        s.field(&p.email, "email@example.com"),
        s.field(&p.phone, "(555) 555-1234"),
        s.optional(&p.linkedin),
    ]
    .into_iter()
    .flatten()
    {
        contact.right(shown.text, shown.style(CONTACT));
    }

    let header_bottom = name_col.y().max(contact.y());
    let mut body = Column::new(MARGIN, header_bottom, width, FontFamily::Inter);
    if header_bottom > top {
        body.gap(8.0);
        body.rule(Color::INK, 1.5);
    }

    // ── body ────────────────────────────────────────────────────────────────
    if s.show_summary() {
        body.gap(6.0);
        body.field(
            s.field(
                &doc.summary,
                "Brief headline summarizing your abilities and top skills",
            ),
            HEADLINE,
        );
    }

    if s.show_skills() {
        heading(&mut body, "Top Skills");
        let skills = doc.skills_text();
        body.field(s.field(&skills, "List your top skills here"), BODY);
    }

    if s.show_experience() {
        heading(&mut body, "Work Experience");
        for exp in s.experiences() {
            body.row(
                s.field(&exp.company, "Company"),
                BODY.bold(),
                s.field(&exp.duration, "MM/YYYY-Present"),
                DATES,
            );
            body.field(s.field(&exp.role, "Job Title"), BODY.italic());
            body.gap(4.0);
            body.bullets(exp.visible_bullets(), BODY);
            body.gap(10.0);
        }
    }

    if s.show_education() {
        heading(&mut body, "Education");
        for edu in s.education() {
            body.joined(
                s.joined(
                    &[
                        s.field(&edu.degree, "Degree"),
                        s.field(&edu.graduation_year, "Year"),
                        s.field(&edu.school, "School"),
                    ],
                    ", ",
                ),
                BODY,
            );
            body.gap(6.0);
        }
    }

    stack(vec![name_col.finish(), contact.finish(), body.finish()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EducationEntry;
    use crate::render::display::{Anchor, Element, TextRun};

    fn runs(elements: &[Element]) -> Vec<&TextRun> {
        elements
            .iter()
            .filter_map(|e| match e {
                Element::Text(run) => Some(run),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_summary_is_a_headline_without_heading() {
        let mut doc = ResumeDocument::default();
        doc.summary = "Ships reliable systems".to_string();
        let (elements, _) = layout(&doc, RenderMode::OmitEmpty);
        let runs = runs(&elements);
        assert!(runs.iter().any(|r| r.content == "Ships reliable systems"));
        assert!(runs.iter().all(|r| r.role != TextRole::Heading));
    }

    #[test]
    fn test_contact_stacked_right() {
        let mut doc = ResumeDocument::default();
        doc.personal.email = "jane@example.com".to_string();
        doc.personal.phone = "555".to_string();
        let (elements, _) = layout(&doc, RenderMode::OmitEmpty);
        let contact: Vec<_> = runs(&elements)
            .into_iter()
            .filter(|r| r.role == TextRole::Detail)
            .collect();
        assert_eq!(contact.len(), 2);
        assert!(contact.iter().all(|r| r.anchor == Anchor::End));
        assert!(contact[0].y < contact[1].y);
    }

    #[test]
    fn test_education_joined_with_commas() {
        let mut doc = ResumeDocument::default();
        doc.education = vec![EducationEntry {
            school: "MIT".to_string(),
            degree: "BS".to_string(),
            field: "CS".to_string(),
            graduation_year: "2020".to_string(),
        }];
        let (elements, _) = layout(&doc, RenderMode::OmitEmpty);
        assert!(runs(&elements).iter().any(|r| r.content == "BS, 2020, MIT"));
    }
}
