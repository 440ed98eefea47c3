//! Display list (the paint instructions a template produces) and its SVG
//! serialization.

use std::fmt::Write as _;

use serde::Serialize;

use crate::layout::FontFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(0xff, 0xff, 0xff);
    pub const INK: Color = Color(0x22, 0x22, 0x22);
    pub const MUTED: Color = Color(0x66, 0x66, 0x66);
    /// Placeholder copy in preview mode.
    pub const PLACEHOLDER: Color = Color(0xa0, 0xa6, 0xb0);

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// What a run of text is, independent of how a template styles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    Name,
    Title,
    Heading,
    Body,
    /// Secondary detail (dates, company lines).
    Detail,
    /// Guidance copy standing in for an empty field (preview mode only).
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub x: f32,
    /// Baseline.
    pub y: f32,
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
    pub family: FontFamily,
    pub color: Color,
    pub anchor: Anchor,
    pub role: TextRole,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Text(TextRun),
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Color,
    },
    Rule {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Color,
        stroke_width: f32,
    },
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        href: String,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// SVG serialization
// ────────────────────────────────────────────────────────────────────────────

/// Serializes a display list as a standalone SVG document on a white page.
pub fn to_svg(width: f32, height: f32, elements: &[Element]) -> String {
    let mut svg = String::with_capacity(256 + elements.len() * 160);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_num(width),
        h = fmt_num(height),
    );
    let _ = write!(
        svg,
        r##"<rect x="0" y="0" width="{}" height="{}" fill="#ffffff"/>"##,
        fmt_num(width),
        fmt_num(height)
    );

    for element in elements {
        write_element(&mut svg, element);
    }

    svg.push_str("</svg>");
    svg
}

fn write_element(svg: &mut String, element: &Element) {
    match element {
        Element::Text(run) => {
            let anchor = match run.anchor {
                Anchor::Start => "start",
                Anchor::Middle => "middle",
                Anchor::End => "end",
            };
            let _ = write!(
                svg,
                r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" font-style="{}" fill="{}" text-anchor="{}" xml:space="preserve">{}</text>"#,
                fmt_num(run.x),
                fmt_num(run.y),
                escape_xml(run.family.css_stack()),
                fmt_num(run.size),
                if run.bold { "bold" } else { "normal" },
                if run.italic { "italic" } else { "normal" },
                run.color.hex(),
                anchor,
                escape_xml(&run.content),
            );
        }
        Element::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => {
            let _ = write!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height),
                fill.hex()
            );
        }
        Element::Rule {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        } => {
            let _ = write!(
                svg,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                fmt_num(*x1),
                fmt_num(*y1),
                fmt_num(*x2),
                fmt_num(*y2),
                stroke.hex(),
                fmt_num(*stroke_width)
            );
        }
        Element::Image {
            x,
            y,
            width,
            height,
            href,
        } => {
            let _ = write!(
                svg,
                r#"<image x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet" xlink:href="{}"/>"#,
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height),
                escape_xml(href)
            );
        }
    }
}

/// Two decimals, trailing zeros dropped: `12.50` → `12.5`, `3.00` → `3`.
fn fmt_num(v: f32) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Escapes markup characters and drops characters XML 1.0 forbids
/// (C0 controls other than tab, newline and CR, plus U+FFFE and U+FFFF).
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\t' | '\n' | '\r' => out.push(c),
            '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => {}
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
