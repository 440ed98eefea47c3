//! Slices one tall capture into A4-proportioned page bitmaps.
//!
//! The capture is scaled so its width fills the page width, which makes one
//! page `page_height_for_width(width)` source rows tall. Page `i` holds rows
//! `[i·h, min((i+1)·h, H))` at its top; the short last page is padded white.
//! A page is started only while rows remain (`remaining > 0`), so an image
//! whose height is an exact multiple of the page height ends without a blank
//! trailing page.

use image::{imageops, Rgba, RgbaImage};
use tracing::debug;

use crate::layout::page_height_for_width;

/// One output page: an A4-proportioned bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub image: RgbaImage,
    /// Source rows this page covers, `[top, top + rows)`.
    pub top: u32,
    pub rows: u32,
}

impl RenderedPage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Tiles `source` top to bottom. Never returns an empty vector for a
/// non-empty width: a zero-height capture still yields one blank page.
pub fn paginate(source: &RgbaImage) -> Vec<RenderedPage> {
    let (width, total) = source.dimensions();
    let page_h = page_height_for_width(width);
    if width == 0 || page_h == 0 {
        return Vec::new();
    }

    let blank = || RgbaImage::from_pixel(width, page_h, Rgba([255, 255, 255, 255]));
    let mut pages = Vec::new();
    let mut top = 0u32;
    let mut remaining = total;

    while remaining > 0 {
        let rows = remaining.min(page_h);
        let slice = imageops::crop_imm(source, 0, top, width, rows).to_image();
        let mut image = blank();
        imageops::replace(&mut image, &slice, 0, 0);
        pages.push(RenderedPage { image, top, rows });

        top += rows;
        remaining -= rows;
    }

    if pages.is_empty() {
        pages.push(RenderedPage {
            image: blank(),
            top: 0,
            rows: 0,
        });
    }

    debug!(width, height = total, page_height = page_h, pages = pages.len(), "Paginated capture");
    pages
}
