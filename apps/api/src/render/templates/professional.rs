//! Two columns: a shaded sidebar with name, contact and summary, and a main
//! column with experience, education and skills. This is the baseline variant.

use super::{stack, Layout};
use crate::layout::{FontFamily, PAGE_HEIGHT_PX, PAGE_WIDTH_PX};
use crate::models::ResumeDocument;
use crate::render::display::{Color, Element, TextRole};
use crate::render::flow::{Column, TextStyle};
use crate::render::sections::Sections;
use crate::render::RenderMode;

const SIDEBAR_WIDTH: f32 = 260.0;
const SIDEBAR_FILL: Color = Color(0xf2, 0xf4, 0xf7);
const ACCENT: Color = Color(0x1f, 0x4e, 0x79);

const NAME: TextStyle = TextStyle::new(24.0, Color::INK, TextRole::Name).bold();
const TITLE: TextStyle = TextStyle::new(13.0, Color::MUTED, TextRole::Title);
const HEADING: TextStyle = TextStyle::new(12.0, ACCENT, TextRole::Heading).bold();
const BODY: TextStyle = TextStyle::new(12.0, Color::INK, TextRole::Body);
const SMALL: TextStyle = TextStyle::new(11.0, Color::INK, TextRole::Body);
const JOB_TITLE: TextStyle = TextStyle::new(14.0, Color::INK, TextRole::Body).bold();
const DETAIL: TextStyle = TextStyle::new(12.0, Color::MUTED, TextRole::Detail);

fn heading(col: &mut Column, text: &str) {
    col.gap(18.0);
    col.text(text, HEADING);
    col.rule(ACCENT, 1.0);
}

pub fn layout(doc: &ResumeDocument, mode: RenderMode) -> Layout {
    let s = Sections::new(doc, mode);
    let p = &doc.personal;

    // ── sidebar ─────────────────────────────────────────────────────────────
    let mut side = Column::new(28.0, 40.0, SIDEBAR_WIDTH - 56.0, FontFamily::Inter);
    side.field(s.field(&p.name, "YOUR NAME"), NAME);
    side.field(s.field(&p.title, "Your Professional Title"), TITLE);

    if s.show_contact() {
        heading(&mut side, "CONTACT");
        side.field(s.field(&p.phone, "(123) 456-7890"), SMALL);
        side.field(s.field(&p.email, "email@example.com"), SMALL);
        side.field(s.field(&p.location, "City, State"), SMALL);
        side.field(s.optional(&p.linkedin), SMALL);
    }

    if s.show_summary() {
        heading(&mut side, "SUMMARY");
        side.field(
            s.field(&doc.summary, "Your professional summary will appear here."),
            BODY,
        );
    }

    // ── main column ─────────────────────────────────────────────────────────
    let main_x = SIDEBAR_WIDTH + 24.0;
    let mut main = Column::new(main_x, 22.0, PAGE_WIDTH_PX - main_x - 40.0, FontFamily::Inter);

    if s.show_experience() {
        heading(&mut main, "PROFESSIONAL EXPERIENCE");
        for exp in s.experiences() {
            main.field(s.field(&exp.role, "Position"), JOB_TITLE);
            main.joined(
                s.joined(
                    &[s.field(&exp.company, "Company"), s.field(&exp.duration, "Date")],
                    " | ",
                ),
                DETAIL,
            );
            main.gap(4.0);
            main.bullets(exp.visible_bullets(), BODY);
            main.gap(10.0);
        }
    }

    if s.show_education() {
        heading(&mut main, "EDUCATION");
        for edu in s.education() {
            main.joined(
                s.joined(
                    &[s.field(&edu.degree, "Degree"), s.field(&edu.field, "Field of Study")],
                    " ",
                ),
                BODY.bold(),
            );
            main.joined(
                s.joined(
                    &[s.field(&edu.school, "School"), s.field(&edu.graduation_year, "Year")],
                    " | ",
                ),
                DETAIL,
            );
            main.gap(8.0);
        }
    }

    if s.show_skills() {
        heading(&mut main, "SKILLS");
        let skills = doc.skills_text();
        main.field(s.field(&skills, "List your skills here"), BODY);
    }

    let side = side.finish();
    let main = main.finish();
    let sidebar_height = side.1.max(main.1).max(PAGE_HEIGHT_PX);
    let backdrop = Element::Rect {
        x: 0.0,
        y: 0.0,
        width: SIDEBAR_WIDTH,
        height: sidebar_height,
        fill: SIDEBAR_FILL,
    };

    stack(vec![(vec![backdrop], 0.0), side, main])
}
