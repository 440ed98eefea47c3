//! Greedy word wrap against a static metric table.

use crate::layout::font_metrics::FontMetricTable;

/// Wraps `text` into lines no wider than `max_width_px`.
///
/// Explicit newlines start a new paragraph; an empty paragraph becomes an
/// empty line. A single word wider than the column is kept whole on its own
/// line. Whitespace-only input yields no lines.
pub fn wrap_lines(
    text: &str,
    metrics: &FontMetricTable,
    size_px: f32,
    bold: bool,
    max_width_px: f32,
) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let space_w = metrics.space_px(size_px, bold);
    let mut lines = Vec::new();

    for paragraph in text.trim().lines() {
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in paragraph.split_whitespace() {
            let word_w = metrics.measure_px(word, size_px, bold);

            if !current.is_empty() && current_width + space_w + word_w > max_width_px {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }

            if !current.is_empty() {
                current.push(' ');
                current_width += space_w;
            }
            current.push_str(word);
            current_width += word_w;
        }

        lines.push(current);
    }

    lines
}
