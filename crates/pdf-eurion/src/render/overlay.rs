//! Standalone overlay document rendering

use super::Canvas;
use super::page::{add_page, finish_document};
use crate::constants::OVERLAY_GSTATE_NAME;
use crate::layout::page_anchors;
use crate::motif::draw_motif;
use crate::options::EurionOptions;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object};

/// Build the content stream for a page's motif grid.
///
/// Color and alpha are set once for the whole grid. Returns the canvas and
/// the number of motifs drawn.
pub fn overlay_content(width: f64, height: f64, options: &EurionOptions) -> (Canvas, usize) {
    let mut canvas = Canvas::new();
    canvas.save_state();
    canvas.set_graphics_state(OVERLAY_GSTATE_NAME);
    canvas.set_fill_rgb(options.color);
    canvas.set_stroke_rgb(options.color);

    let mut motifs = 0;
    for anchor in page_anchors(width, height, options) {
        draw_motif(&mut canvas, anchor, options.size);
        motifs += 1;
    }

    canvas.restore_state();
    (canvas, motifs)
}

/// Render the motif grid into a one-page document of exactly
/// `width` × `height` points.
///
/// Fill and stroke alpha are both `options.opacity`, set through an
/// ExtGState on the page.
pub fn render_overlay(width: f64, height: f64, options: &EurionOptions) -> Result<Document> {
    let (canvas, motifs) = overlay_content(width, height, options);
    log::trace!("Overlay {}x{}: {} motifs", width, height, motifs);

    let opacity = options.opacity as f32;
    let gstate = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"ExtGState".to_vec())),
        ("ca", Object::Real(opacity)),
        ("CA", Object::Real(opacity)),
    ]);
    let mut gstates = Dictionary::new();
    gstates.set(OVERLAY_GSTATE_NAME, Object::Dictionary(gstate));

    let mut resources = Dictionary::new();
    resources.set("ExtGState", Object::Dictionary(gstates));

    let mut doc = Document::with_version("1.7");
    let pages_tree_id = doc.new_object_id();
    let page_id = add_page(
        &mut doc,
        pages_tree_id,
        width,
        height,
        canvas.into_bytes(),
        resources,
    );
    finish_document(&mut doc, pages_tree_id, &[page_id]);

    Ok(doc)
}
