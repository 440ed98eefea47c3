//! Capture/Rasterizer: paints a mounted layout's SVG into an RGBA raster at a
//! fixed 2× scale.
//!
//! Painting is CPU-bound, so [`Rasterizer::capture`] moves it to the blocking
//! pool and the caller awaits the finished raster. Remote images are
//! downloaded first so their pixels land in the raster. Image references that
//! cannot be resolved (unreachable URLs, missing files, undecodable data) are
//! dropped by the SVG parser and never fail a capture.

pub mod frame;
pub mod remote;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;
use reqwest::Client;
use resvg::tiny_skia;
use thiserror::Error;
use tracing::{debug, info};
use usvg::fontdb;

use crate::render::RenderedLayout;

pub use frame::PreviewFrame;
pub use remote::RemoteImages;

/// Output pixels per layout pixel.
pub const CAPTURE_SCALE: f32 = 2.0;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Capture target is not mounted")]
    NotMounted,

    #[error("Failed to parse layout markup: {0}")]
    Parse(#[from] usvg::Error),

    #[error("Cannot allocate a {width}x{height} raster")]
    Allocate { width: u32, height: u32 },

    #[error("Raster buffer does not match its dimensions")]
    Buffer,

    #[error("Capture task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Clone)]
pub struct Rasterizer {
    fontdb: Arc<fontdb::Database>,
    resources_dir: Option<PathBuf>,
    client: Client,
}

impl Rasterizer {
    /// System fonts plus any `.ttf`/`.otf`/`.ttc` files in `fonts_dir`.
    /// Relative image hrefs resolve against `resources_dir`.
    pub fn new(fonts_dir: Option<&Path>, resources_dir: Option<PathBuf>) -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        if let Some(dir) = fonts_dir {
            load_fonts_from_dir(&mut db, dir);
        }
        info!(faces = db.len(), "Font database loaded");
        Self::with_fontdb(db, resources_dir)
    }

    pub fn with_fontdb(db: fontdb::Database, resources_dir: Option<PathBuf>) -> Self {
        Self {
            fontdb: Arc::new(db),
            resources_dir,
            client: Client::new(),
        }
    }

    pub fn face_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Snapshots exactly the target layout. Fails fast if nothing is mounted.
    pub async fn capture(&self, target: Option<&RenderedLayout>) -> Result<RgbaImage, CaptureError> {
        let layout = target.ok_or(CaptureError::NotMounted)?;
        let images = remote::prefetch(&self.client, layout).await;
        if !images.is_empty() {
            debug!(count = images.len(), "Serving prefetched images to the painter");
        }
        let svg = layout.svg.clone();
        let rasterizer = self.clone();
        tokio::task::spawn_blocking(move || rasterizer.paint_with(&svg, &images)).await?
    }

    /// Synchronous paint of standalone SVG markup at [`CAPTURE_SCALE`].
    pub fn paint(&self, svg: &str) -> Result<RgbaImage, CaptureError> {
        self.paint_with(svg, &RemoteImages::default())
    }

    /// Like [`Rasterizer::paint`], with remote image hrefs served from `images`.
    pub fn paint_with(&self, svg: &str, images: &RemoteImages) -> Result<RgbaImage, CaptureError> {
        let options = usvg::Options {
            resources_dir: self.resources_dir.clone(),
            fontdb: self.fontdb.clone(),
            image_href_resolver: images.resolver(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &options)?;

        let size = tree.size();
        let width = (size.width() * CAPTURE_SCALE).ceil() as u32;
        let height = (size.height() * CAPTURE_SCALE).ceil() as u32;
        let mut pixmap =
            tiny_skia::Pixmap::new(width, height).ok_or(CaptureError::Allocate { width, height })?;

        // Opaque white first, so the premultiplied buffer equals straight RGBA.
        pixmap.fill(tiny_skia::Color::WHITE);
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(CAPTURE_SCALE, CAPTURE_SCALE),
            &mut pixmap.as_mut(),
        );

        debug!(width, height, "Captured layout");
        RgbaImage::from_raw(width, height, pixmap.take()).ok_or(CaptureError::Buffer)
    }
}

fn load_fonts_from_dir(db: &mut fontdb::Database, dir: &Path) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        debug!(dir = %dir.display(), "Fonts directory not readable, skipping");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        if !matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc") {
            continue;
        }
        if db.load_font_file(&path).is_err() {
            debug!(path = %path.display(), "Skipping unreadable font file");
        }
    }
}
