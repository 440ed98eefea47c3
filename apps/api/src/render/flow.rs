//! Vertical text flow inside one column of a template.

use crate::layout::{get_metrics, wrap_lines, FontFamily, FontMetricTable};
use crate::render::display::{Anchor, Color, Element, TextRole, TextRun};
use crate::render::sections::Shown;

/// Line box height as a multiple of font size.
pub const LINE_HEIGHT: f32 = 1.4;
/// Baseline offset from the top of a line box, as a multiple of font size.
const BASELINE: f32 = 1.05;
const BULLET_INDENT: f32 = 14.0;
const ROW_GUTTER: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
    pub role: TextRole,
}

impl TextStyle {
    pub const fn new(size: f32, color: Color, role: TextRole) -> Self {
        Self {
            size,
            bold: false,
            italic: false,
            color,
            role,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Same size and weight, painted as muted guidance copy.
    pub const fn placeholder(mut self) -> Self {
        self.color = Color::PLACEHOLDER;
        self.role = TextRole::Placeholder;
        self
    }

    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A column with a moving cursor. Text is wrapped to the column width and
/// stacked top to bottom.
pub struct Column {
    x: f32,
    width: f32,
    y: f32,
    family: FontFamily,
    elements: Vec<Element>,
}

impl Column {
    pub fn new(x: f32, y: f32, width: f32, family: FontFamily) -> Self {
        Self {
            x,
            width,
            y,
            family,
            elements: Vec::new(),
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    fn metrics(&self) -> &'static FontMetricTable {
        get_metrics(self.family)
    }

    pub fn gap(&mut self, px: f32) {
        self.y += px;
    }

    /// Wrapped left-aligned text.
    pub fn text(&mut self, content: &str, style: TextStyle) {
        for line in wrap_lines(content, self.metrics(), style.size, style.bold, self.width) {
            self.push_line(line, self.x, Anchor::Start, style);
        }
    }

    /// Draws a resolved field, if it resolved to anything.
    pub fn field(&mut self, shown: Option<Shown<'_>>, style: TextStyle) {
        if let Some(shown) = shown {
            self.text(shown.text, shown.style(style));
        }
    }

    /// Draws a joined field (see [`Sections::joined`](crate::render::sections::Sections::joined)).
    pub fn joined(&mut self, joined: Option<(String, bool)>, style: TextStyle) {
        if let Some((text, placeholder)) = joined {
            self.field(Some(Shown { text: &text, placeholder }), style);
        }
    }

    /// Wrapped text centered on the column.
    pub fn centered(&mut self, content: &str, style: TextStyle) {
        let center = self.x + self.width / 2.0;
        for line in wrap_lines(content, self.metrics(), style.size, style.bold, self.width) {
            self.push_line(line, center, Anchor::Middle, style);
        }
    }

    /// Wrapped text flush against the column's right edge.
    pub fn right(&mut self, content: &str, style: TextStyle) {
        let edge = self.x + self.width;
        for line in wrap_lines(content, self.metrics(), style.size, style.bold, self.width) {
            self.push_line(line, edge, Anchor::End, style);
        }
    }

    /// Left text with a right-aligned companion on the first line, e.g. a job
    /// title with its dates. The left side wraps in the space the right side
    /// leaves free.
    pub fn row(
        &mut self,
        left: Option<Shown<'_>>,
        left_style: TextStyle,
        right: Option<Shown<'_>>,
        right_style: TextStyle,
    ) {
        let right = right.map(|r| (r.text.to_string(), r.style(right_style)));
        let right_w = right
            .as_ref()
            .map(|(t, s)| self.metrics().measure_px(t, s.size, s.bold) + ROW_GUTTER)
            .unwrap_or(0.0);
        let top = self.y;

        if let Some((text, style)) = right {
            let baseline = top + left_style.size.max(style.size) * BASELINE;
            let run = self.run(text, self.x + self.width, baseline, Anchor::End, style);
            self.elements.push(Element::Text(run));
        }

        match left {
            Some(shown) => {
                let style = shown.style(left_style);
                let max_w = (self.width - right_w).max(self.width / 3.0);
                for line in wrap_lines(shown.text, self.metrics(), style.size, style.bold, max_w) {
                    self.push_line(line, self.x, Anchor::Start, style);
                }
            }
            None => self.y += left_style.size * LINE_HEIGHT,
        }

        if self.y == top {
            self.y += left_style.size * LINE_HEIGHT;
        }
    }

    /// A bulleted list. Items are expected to be pre-filtered to non-blank.
    pub fn bullets<'a>(&mut self, items: impl IntoIterator<Item = &'a str>, style: TextStyle) {
        let text_w = self.width - BULLET_INDENT;
        for item in items {
            let lines = wrap_lines(item, self.metrics(), style.size, style.bold, text_w);
            let Some(first_baseline) = lines.first().map(|_| self.y + style.size * BASELINE) else {
                continue;
            };
            let marker = self.run("•".to_string(), self.x + 2.0, first_baseline, Anchor::Start, style);
            self.elements.push(Element::Text(marker));
            for line in lines {
                self.push_line(line, self.x + BULLET_INDENT, Anchor::Start, style);
            }
            self.y += style.size * 0.25;
        }
    }

    /// A horizontal rule across the column at the cursor.
    pub fn rule(&mut self, stroke: Color, stroke_width: f32) {
        self.elements.push(Element::Rule {
            x1: self.x,
            y1: self.y,
            x2: self.x + self.width,
            y2: self.y,
            stroke,
            stroke_width,
        });
        self.y += stroke_width + 6.0;
    }

    /// Hands back the painted elements and the cursor's final position.
    pub fn finish(self) -> (Vec<Element>, f32) {
        (self.elements, self.y)
    }

    fn push_line(&mut self, content: String, x: f32, anchor: Anchor, style: TextStyle) {
        let baseline = self.y + style.size * BASELINE;
        if !content.is_empty() {
            let run = self.run(content, x, baseline, anchor, style);
            self.elements.push(Element::Text(run));
        }
        self.y += style.size * LINE_HEIGHT;
    }

    fn run(&self, content: String, x: f32, y: f32, anchor: Anchor, style: TextStyle) -> TextRun {
        TextRun {
            x,
            y,
            size: style.size,
            bold: style.bold,
            italic: style.italic,
            family: self.family,
            color: style.color,
            anchor,
            role: style.role,
            content,
        }
    }
}
