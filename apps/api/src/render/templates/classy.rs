//! Centered-header classic: serif type, a single column, rules under each
//! section heading.

use super::{stack, Layout};
use crate::layout::{FontFamily, PAGE_WIDTH_PX};
use crate::models::ResumeDocument;
use crate::render::display::{Color, TextRole};
use crate::render::flow::{Column, TextStyle};
use crate::render::sections::Sections;
use crate::render::RenderMode;

const MARGIN: f32 = 60.0;

const NAME: TextStyle = TextStyle::new(30.0, Color::INK, TextRole::Name).bold();
const TITLE: TextStyle = TextStyle::new(14.0, Color::MUTED, TextRole::Title).italic();
const CONTACT: TextStyle = TextStyle::new(12.0, Color::MUTED, TextRole::Detail);
const HEADING: TextStyle = TextStyle::new(14.0, Color::INK, TextRole::Heading).bold();
const BODY: TextStyle = TextStyle::new(13.0, Color::INK, TextRole::Body);
const COMPANY: TextStyle = TextStyle::new(13.0, Color::MUTED, TextRole::Detail).italic();

fn heading(col: &mut Column, text: &str) {
    col.gap(16.0);
    col.text(text, HEADING);
    col.gap(2.0);
    col.rule(Color::INK, 0.8);
}

pub fn layout(doc: &ResumeDocument, mode: RenderMode) -> Layout {
    let s = Sections::new(doc, mode);
    let p = &doc.personal;
    let mut col = Column::new(MARGIN, 48.0, PAGE_WIDTH_PX - 2.0 * MARGIN, FontFamily::EbGaramond);

    if let Some(name) = s.field(&p.name, "YOUR NAME") {
        col.centered(name.text, name.style(NAME));
    }
    if let Some(title) = s.field(&p.title, "Your Professional Title") {
        col.centered(title.text, title.style(TITLE));
    }
    if let Some((line, placeholder)) = s.joined(
        &[
            s.field(&p.phone, "555-488-1111"),
            s.field(&p.email, "email@gmail.com"),
            s.field(&p.location, "City, State"),
            s.optional(&p.linkedin),
        ],
        " | ",
    ) {
        col.gap(4.0);
        let style = if placeholder { CONTACT.placeholder() } else { CONTACT };
        col.centered(&line, style);
    }

    if s.show_summary() {
        heading(&mut col, "SUMMARY");
        col.field(s.field(&doc.summary, "Write a short professional summary."), BODY);
    }

    if s.show_experience() {
        heading(&mut col, "PROFESSIONAL EXPERIENCE");
        for exp in s.experiences() {
            col.row(
                s.field(&exp.role, "Job Title"),
                BODY.bold(),
                s.field(&exp.duration, "Date"),
                BODY,
            );
            col.field(s.field(&exp.company, "Company Name"), COMPANY);
            col.gap(4.0);
            col.bullets(exp.visible_bullets(), BODY);
            col.gap(10.0);
        }
    }

    if s.show_education() {
        heading(&mut col, "EDUCATION");
        for edu in s.education() {
            col.row(
                s.field(&edu.school, "School"),
                BODY.bold(),
                s.field(&edu.graduation_year, "Year"),
                BODY,
            );
            col.joined(
                s.joined(
                    &[s.field(&edu.degree, "Degree"), s.field(&edu.field, "Field of Study")],
                    " ",
                ),
                BODY,
            );
            col.gap(8.0);
        }
    }

    if s.show_skills() {
        heading(&mut col, "SKILLS");
        let skills = doc.skills_text();
        col.field(s.field(&skills, "List your skills here"), BODY);
    }

    stack(vec![col.finish()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::display::{Anchor, Element};

    #[test]
    fn test_contact_line_joined_and_centered() {
        let mut doc = ResumeDocument::default();
        doc.personal.email = "jane@example.com".to_string();
        doc.personal.location = "Berlin".to_string();
        let (elements, _) = layout(&doc, RenderMode::OmitEmpty);
        let contact = elements
            .iter()
            .find_map(|e| match e {
                Element::Text(run) if run.role == TextRole::Detail => Some(run),
                _ => None,
            })
            .unwrap();
        assert_eq!(contact.content, "jane@example.com | Berlin");
        assert_eq!(contact.anchor, Anchor::Middle);
    }

    #[test]
    fn test_serif_family_throughout() {
        let mut doc = ResumeDocument::default();
        doc.personal.name = "Jane Doe".to_string();
        doc.summary = "Writes".to_string();
        let (elements, _) = layout(&doc, RenderMode::OmitEmpty);
        assert!(elements.iter().all(|e| match e {
            Element::Text(run) => run.family == FontFamily::EbGaramond,
            _ => true,
        }));
    }

    #[test]
    fn test_each_heading_gets_a_rule() {
        let mut doc = ResumeDocument::default();
        doc.summary = "Writes".to_string();
        doc.skills = vec!["Rust".to_string()];
        let (elements, _) = layout(&doc, RenderMode::OmitEmpty);
        let rules = elements.iter().filter(|e| matches!(e, Element::Rule { .. })).count();
        assert_eq!(rules, 2);
    }
}
