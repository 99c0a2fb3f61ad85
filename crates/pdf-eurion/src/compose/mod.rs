//! Page compositing - stamping the overlay above each source page
//!
//! This module orchestrates the overlay process:
//! 1. Read each source page's visible box and rotation
//! 2. Render a fresh overlay document of the same size
//! 3. Build a new output page with the source page below the overlay

mod io;

pub use io::{load_pdf, overlay_file, save_pdf};

use crate::constants::{OVERLAY_XOBJECT_NAME, PAGE_XOBJECT_NAME};
use crate::options::EurionOptions;
use crate::render::{
    PageGeometry, add_page, create_page_xobject, finish_document, fmt_num, get_page_geometry,
    render_overlay,
};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashMap;

/// Composite the Eurion overlay onto every page of `source`.
///
/// Returns a new document with one page per source page, in source order.
/// The source document is not modified.
pub fn apply_overlay(source: &Document, options: &EurionOptions) -> Result<Document> {
    options.validate()?;

    let pages = source.get_pages();
    if pages.is_empty() {
        return Err(EurionError::NoPages);
    }

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_ids = Vec::with_capacity(pages.len());

    // Resources shared between source pages are copied once
    let mut source_cache: HashMap<ObjectId, ObjectId> = HashMap::new();

    for (&page_number, &source_page_id) in &pages {
        let geometry = get_page_geometry(source, source_page_id)?;
        let (width, height) = geometry.display_size();
        log::debug!(
            "Page {}: {}x{} pt, rotated {}",
            page_number,
            width,
            height,
            geometry.rotation
        );

        let overlay = render_overlay(width, height, options)?;

        let page_id = composite_page(
            &mut output,
            pages_tree_id,
            source,
            source_page_id,
            geometry,
            &overlay,
            &mut source_cache,
        )?;
        page_ids.push(page_id);
    }

    finish_document(&mut output, pages_tree_id, &page_ids);
    Ok(output)
}

/// Build one output page: source page content first, overlay on top.
fn composite_page(
    output: &mut Document,
    pages_tree_id: ObjectId,
    source: &Document,
    source_page_id: ObjectId,
    geometry: PageGeometry,
    overlay: &Document,
    source_cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_xobject = create_page_xobject(output, source, source_page_id, source_cache)?;

    let overlay_page_id = overlay
        .get_pages()
        .values()
        .next()
        .copied()
        .ok_or(EurionError::NoPages)?;
    let mut overlay_cache = HashMap::new();
    let overlay_xobject = create_page_xobject(output, overlay, overlay_page_id, &mut overlay_cache)?;

    let mut xobjects = Dictionary::new();
    xobjects.set(PAGE_XOBJECT_NAME, Object::Reference(page_xobject));
    xobjects.set(OVERLAY_XOBJECT_NAME, Object::Reference(overlay_xobject));

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = format!(
        "{}{}",
        placement_command(PAGE_XOBJECT_NAME, geometry.display_matrix()),
        placement_command(OVERLAY_XOBJECT_NAME, IDENTITY_MATRIX),
    );

    let (width, height) = geometry.display_size();
    Ok(add_page(
        output,
        pages_tree_id,
        width,
        height,
        content.into_bytes(),
        resources,
    ))
}

const IDENTITY_MATRIX: [f64; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// Generate the content stream command that draws a full-page XObject.
fn placement_command(xobject_name: &str, matrix: [f64; 6]) -> String {
    let [a, b, c, d, e, f] = matrix.map(fmt_num);
    format!(
        "q {} {} {} {} {} {} cm /{} Do Q\n",
        a, b, c, d, e, f, xobject_name
    )
}
