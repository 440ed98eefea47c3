//! Banner header over two columns. Skills are split on commas into a
//! bulleted list here, unlike the other variants.

use super::{stack, Layout};
use crate::layout::{FontFamily, PAGE_WIDTH_PX};
use crate::models::ResumeDocument;
use crate::render::display::{Color, Element, TextRole};
use crate::render::flow::{Column, TextStyle};
use crate::render::sections::Sections;
use crate::render::RenderMode;

const BANNER_FILL: Color = Color(0x2c, 0x3e, 0x50);
const BANNER_MIN_HEIGHT: f32 = 130.0;
const LEFT_WIDTH: f32 = 220.0;
const MARGIN: f32 = 36.0;
const GUTTER: f32 = 34.0;

const NAME: TextStyle = TextStyle::new(32.0, Color::WHITE, TextRole::Name).bold();
const TITLE: TextStyle = TextStyle::new(14.0, Color(0xcf, 0xd8, 0xe0), TextRole::Title);
const HEADING: TextStyle = TextStyle::new(13.0, BANNER_FILL, TextRole::Heading).bold();
const BODY: TextStyle = TextStyle::new(12.0, Color(0x44, 0x44, 0x44), TextRole::Body);
const SMALL: TextStyle = TextStyle::new(11.0, Color::MUTED, TextRole::Detail);
const JOB_TITLE: TextStyle = TextStyle::new(13.0, BANNER_FILL, TextRole::Body).bold();

fn heading(col: &mut Column, text: &str) {
    col.gap(16.0);
    col.text(text, HEADING);
    col.rule(BANNER_FILL, 2.0);
}

pub fn layout(doc: &ResumeDocument, mode: RenderMode) -> Layout {
    let s = Sections::new(doc, mode);
    let p = &doc.personal;

    // ── banner ──────────────────────────────────────────────────────────────
    let mut banner = Column::new(MARGIN + 12.0, 36.0, PAGE_WIDTH_PX - 2.0 * (MARGIN + 12.0), FontFamily::Inter);
    banner.field(s.field(&p.name, "YOUR NAME"), NAME);
    if let Some(title) = s.field(&p.title, "YOUR PROFESSIONAL TITLE") {
        banner.gap(2.0);
        let upper = title.text.to_uppercase();
        banner.text(&upper, title.style(TITLE));
    }
    let banner_height = (banner.y() + 28.0).max(BANNER_MIN_HEIGHT);
    let backdrop = Element::Rect {
        x: 0.0,
        y: 0.0,
        width: PAGE_WIDTH_PX,
        height: banner_height,
        fill: BANNER_FILL,
    };

    // ── left column ─────────────────────────────────────────────────────────
    let body_top = banner_height + 12.0;
    let mut left = Column::new(MARGIN, body_top, LEFT_WIDTH, FontFamily::Inter);

    if s.show_contact() {
        heading(&mut left, "CONTACT");
        left.field(s.field(&p.phone, "123-456-7890"), BODY);
        left.field(s.field(&p.email, "email@gmail.com"), BODY);
        left.field(s.field(&p.location, "City, State"), BODY);
        left.field(s.optional(&p.linkedin), BODY);
    }

    if s.show_education() {
        heading(&mut left, "EDUCATION");
        for edu in s.education() {
            left.joined(
                s.joined(
                    &[s.field(&edu.degree, "Degree"), s.field(&edu.field, "Field")],
                    " / ",
                ),
                BODY.bold().with_color(BANNER_FILL),
            );
            left.field(s.field(&edu.school, "School"), SMALL);
            left.field(s.field(&edu.graduation_year, "Year"), SMALL);
            left.gap(10.0);
        }
    }

    if s.show_skills() {
        heading(&mut left, "SKILLS");
        let items = doc.skill_items();
        if items.is_empty() {
            left.field(s.field("", "List your skills here"), SMALL);
        } else {
            left.bullets(items.iter().map(String::as_str), SMALL);
        }
    }

    // ── right column ────────────────────────────────────────────────────────
    let right_x = MARGIN + LEFT_WIDTH + GUTTER;
    let mut right = Column::new(right_x, body_top, PAGE_WIDTH_PX - right_x - MARGIN, FontFamily::Inter);

    if s.show_summary() {
        heading(&mut right, "PROFILE");
        right.field(
            s.field(&doc.summary, "Write a powerful performance summary here."),
            BODY,
        );
    }

    if s.show_experience() {
        heading(&mut right, "PROFESSIONAL EXPERIENCE");
        for exp in s.experiences() {
            right.field(s.field(&exp.role, "JOB TITLE"), JOB_TITLE);
            right.joined(
                s.joined(
                    &[s.field(&exp.company, "Company Name"), s.field(&exp.duration, "Date")],
                    " | ",
                ),
                SMALL,
            );
            right.gap(4.0);
            right.bullets(exp.visible_bullets(), BODY);
            right.gap(10.0);
        }
    }

    stack(vec![
        (vec![backdrop], banner_height),
        banner.finish(),
        left.finish(),
        right.finish(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::display::TextRun;

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
    fn test_name_painted_white_on_banner() {
        let mut doc = ResumeDocument::default();
        doc.personal.name = "Jane Doe".to_string();
        doc.personal.title = "Frontend Engineer".to_string();
        let (elements, _) = layout(&doc, RenderMode::OmitEmpty);
        assert!(matches!(elements.first(), Some(Element::Rect { fill, .. }) if *fill == BANNER_FILL));

        let runs = runs(&elements);
        let name = runs.iter().find(|r| r.content == "Jane Doe").unwrap();
        assert_eq!(name.color, Color::WHITE);
        assert!(runs.iter().any(|r| r.content == "FRONTEND ENGINEER"));
    }

    #[test]
    fn test_skills_listed_individually() {
        let mut doc = ResumeDocument::default();
        doc.skills = vec!["Rust, Go".to_string(), "SQL".to_string()];
        let (elements, _) = layout(&doc, RenderMode::OmitEmpty);
        let contents: Vec<&str> = runs(&elements).iter().map(|r| r.content.as_str()).collect();
        for skill in ["Rust", "Go", "SQL"] {
            assert!(contents.contains(&skill), "missing {skill}");
        }
    }

    #[test]
    fn test_empty_skills_show_placeholder_in_preview() {
        let doc = ResumeDocument::default();
        let (elements, _) = layout(&doc, RenderMode::Placeholder);
        assert!(runs(&elements)
            .iter()
            .any(|r| r.content == "List your skills here" && r.role == TextRole::Placeholder));
    }
}
