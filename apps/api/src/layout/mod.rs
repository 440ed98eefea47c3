// Page geometry and text measurement shared by the template renderer and the
// paginator. Everything here is pure and synchronous.

pub mod font_metrics;
pub mod wrap;

pub use font_metrics::{get_metrics, FontFamily, FontMetricTable};
pub use wrap::wrap_lines;

/// A4 portrait, in millimetres.
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// A4 in PDF points (1pt = 1/72in).
pub const A4_WIDTH_PT: f32 = A4_WIDTH_MM * 72.0 / 25.4;
pub const A4_HEIGHT_PT: f32 = A4_HEIGHT_MM * 72.0 / 25.4;

/// A4 in CSS pixels (96 per inch), rounded to whole pixels. Templates are laid
/// out at this width; a layout is never shorter than one page.
pub const PAGE_WIDTH_PX: f32 = 794.0;
pub const PAGE_HEIGHT_PX: f32 = 1123.0;

/// Height of one page, in source pixels, for an image `width_px` wide that is
/// scaled to fill the page width.
pub fn page_height_for_width(width_px: u32) -> u32 {
    ((width_px as f64) * (A4_HEIGHT_MM as f64) / (A4_WIDTH_MM as f64)).round() as u32
}
