use std::fmt::Write as _;

use crate::render::RenderedLayout;

/// Space between the viewer edge and the page.
const FRAME_PADDING: f32 = 32.0;

/// A preview viewer: page chrome (backdrop, drop shadow, border) around one
/// mounted layout. Only the mounted layout is a capture target; the chrome
/// exists for display alone.
#[derive(Debug, Default)]
pub struct PreviewFrame {
    mounted: Option<RenderedLayout>,
}

impl PreviewFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, layout: RenderedLayout) {
        self.mounted = Some(layout);
    }

    /// The inner region to capture, if a layout is mounted.
    pub fn target(&self) -> Option<&RenderedLayout> {
        self.mounted.as_ref()
    }

    /// The viewer markup: chrome with the mounted layout nested inside.
    pub fn to_svg(&self) -> Option<String> {
        let layout = self.mounted.as_ref()?;
        let w = layout.width + 2.0 * FRAME_PADDING;
        let h = layout.height + 2.0 * FRAME_PADDING;
        let pad = FRAME_PADDING;

        let mut svg = String::with_capacity(layout.svg.len() + 640);
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        svg.push_str(
            r##"<defs><filter id="page-shadow" x="-10%" y="-10%" width="120%" height="120%"><feDropShadow dx="0" dy="4" stdDeviation="10" flood-color="#000000" flood-opacity="0.18"/></filter></defs>"##,
        );
        let _ = write!(
            svg,
            r##"<rect x="0" y="0" width="{w}" height="{h}" fill="#e9ecef"/><rect x="{pad}" y="{pad}" width="{}" height="{}" fill="#ffffff" stroke="#d0d5dc" stroke-width="1" filter="url(#page-shadow)"/>"##,
            layout.width, layout.height
        );
        // Nest the page as its own viewport.
        svg.push_str(&layout.svg.replacen("<svg ", &format!(r#"<svg x="{pad}" y="{pad}" "#), 1));
        svg.push_str("</svg>");
        Some(svg)
    }
}
