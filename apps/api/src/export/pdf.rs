use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, TextStr};

use crate::export::paginate::RenderedPage;
use crate::layout::{A4_HEIGHT_PT, A4_WIDTH_PT};

const PAGE_IMAGE: Name<'static> = Name(b"Im0");

/// Writes one A4 page per bitmap, each bitmap stretched over the full page.
/// Pages keep their input order.
pub fn assemble_pdf(pages: &[RenderedPage], title: &str) -> std::io::Result<Vec<u8>> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let tree_id = alloc.bump();
    let info_id = alloc.bump();

    // Three objects per page: the page, its content stream and its image.
    let ids: Vec<(Ref, Ref, Ref)> = pages
        .iter()
        .map(|_| (alloc.bump(), alloc.bump(), alloc.bump()))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(ids.iter().map(|(page_id, _, _)| *page_id))
        .count(ids.len() as i32);
    pdf.document_info(info_id)
        .title(TextStr(title))
        .producer(TextStr(env!("CARGO_PKG_NAME")));

    for (page, &(page_id, content_id, image_id)) in pages.iter().zip(&ids) {
        let mut writer = pdf.page(page_id);
        writer.media_box(Rect::new(0.0, 0.0, A4_WIDTH_PT, A4_HEIGHT_PT));
        writer.parent(tree_id);
        writer.contents(content_id);
        writer.resources().x_objects().pair(PAGE_IMAGE, image_id);
        writer.finish();

        let compressed = deflate(&rgb_bytes(page))?;
        let mut image = pdf.image_xobject(image_id, &compressed);
        image.filter(Filter::FlateDecode);
        image.width(page.width() as i32);
        image.height(page.height() as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        image.finish();

        let mut content = Content::new();
        content.save_state();
        content.transform([A4_WIDTH_PT, 0.0, 0.0, A4_HEIGHT_PT, 0.0, 0.0]);
        content.x_object(PAGE_IMAGE);
        content.restore_state();
        pdf.stream(content_id, &content.finish());
    }

    Ok(pdf.finish())
}

/// Drops the alpha channel. Captures are painted on opaque white.
fn rgb_bytes(page: &RenderedPage) -> Vec<u8> {
    page.image
        .pixels()
        .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
        .collect()
}

fn deflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
