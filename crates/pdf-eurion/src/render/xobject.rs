//! XObject creation for page compositing
//!
//! This module handles creating Form XObjects from PDF pages, which are
//! then stacked onto freshly built output pages.

use crate::constants::{DEFAULT_PAGE_DIMENSIONS, MAX_PAGE_TREE_DEPTH};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

// =============================================================================
// Page Geometry
// =============================================================================

/// A page box (MediaBox, CropBox) in the page's own user space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBox {
    pub llx: f64,
    pub lly: f64,
    pub urx: f64,
    pub ury: f64,
}

impl PageBox {
    pub fn width(&self) -> f64 {
        self.urx - self.llx
    }

    pub fn height(&self) -> f64 {
        self.ury - self.lly
    }

    /// Overlapping area of two boxes, if it is not empty
    pub fn intersect(&self, other: &PageBox) -> Option<PageBox> {
        let clipped = PageBox {
            llx: self.llx.max(other.llx),
            lly: self.lly.max(other.lly),
            urx: self.urx.min(other.urx),
            ury: self.ury.min(other.ury),
        };
        (clipped.width() > 0.0 && clipped.height() > 0.0).then_some(clipped)
    }

    fn to_array(self) -> Vec<Object> {
        [self.llx, self.lly, self.urx, self.ury]
            .into_iter()
            .map(|v| Object::Real(v as f32))
            .collect()
    }
}

impl Default for PageBox {
    fn default() -> Self {
        Self {
            llx: 0.0,
            lly: 0.0,
            urx: DEFAULT_PAGE_DIMENSIONS.0,
            ury: DEFAULT_PAGE_DIMENSIONS.1,
        }
    }
}

/// The visible part of a page and how it is turned for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// CropBox clipped to the MediaBox
    pub visible: PageBox,
    /// Clockwise display rotation: 0, 90, 180 or 270
    pub rotation: u16,
}

impl PageGeometry {
    /// Width and height of the page as displayed
    pub fn display_size(&self) -> (f64, f64) {
        match self.rotation {
            90 | 270 => (self.visible.height(), self.visible.width()),
            _ => (self.visible.width(), self.visible.height()),
        }
    }

    /// Transformation from page space to display space, whose origin is the
    /// lower-left corner of the displayed page.
    pub fn display_matrix(&self) -> [f64; 6] {
        let PageBox { llx, lly, urx, ury } = self.visible;
        match self.rotation {
            90 => [0.0, -1.0, 1.0, 0.0, -lly, urx],
            180 => [-1.0, 0.0, 0.0, -1.0, urx, ury],
            270 => [0.0, 1.0, -1.0, 0.0, ury, -llx],
            _ => [1.0, 0.0, 0.0, 1.0, -llx, -lly],
        }
    }
}

/// Get the page MediaBox, following the page tree when it is inherited.
///
/// Falls back to US Letter when no usable MediaBox is found.
pub fn get_media_box(doc: &Document, page_id: ObjectId) -> Result<PageBox> {
    Ok(read_box(doc, page_id, b"MediaBox")?.unwrap_or_default())
}

/// Get the visible page area: the CropBox clipped to the MediaBox, or the
/// MediaBox alone when there is no usable CropBox.
pub fn get_page_box(doc: &Document, page_id: ObjectId) -> Result<PageBox> {
    let media = get_media_box(doc, page_id)?;
    Ok(read_box(doc, page_id, b"CropBox")?
        .and_then(|crop| crop.intersect(&media))
        .unwrap_or(media))
}

/// Get the page's display rotation, normalized to 0, 90, 180 or 270.
pub fn get_page_rotation(doc: &Document, page_id: ObjectId) -> Result<u16> {
    let degrees = inherited_attribute(doc, page_id, b"Rotate")?
        .and_then(|obj| extract_number(doc, obj))
        .map_or(0, |d| d as i64);
    Ok((degrees.rem_euclid(360) / 90 * 90) as u16)
}

/// Visible box and rotation of a page
pub fn get_page_geometry(doc: &Document, page_id: ObjectId) -> Result<PageGeometry> {
    Ok(PageGeometry {
        visible: get_page_box(doc, page_id)?,
        rotation: get_page_rotation(doc, page_id)?,
    })
}

/// Read a four-number box attribute, honouring inheritance.
fn read_box(doc: &Document, page_id: ObjectId, key: &[u8]) -> Result<Option<PageBox>> {
    let Some(obj) = inherited_attribute(doc, page_id, key)? else {
        return Ok(None);
    };

    let array = match obj {
        Object::Reference(id) => doc.get_object(*id)?.as_array().ok(),
        other => other.as_array().ok(),
    };

    let numbers: Option<Vec<f64>> = array.map(|arr| {
        arr.iter()
            .filter_map(|o| extract_number(doc, o))
            .collect()
    });

    match numbers.as_deref() {
        Some([a, b, c, d]) => Ok(Some(PageBox {
            llx: a.min(*c),
            lly: b.min(*d),
            urx: a.max(*c),
            ury: b.max(*d),
        })),
        _ => Ok(None),
    }
}

/// Extract numeric value from a PDF object
fn extract_number(doc: &Document, obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(f64::from(*r)),
        Object::Reference(id) => doc
            .get_object(*id)
            .ok()
            .and_then(|o| extract_number(doc, o)),
        _ => None,
    }
}

/// Look up a page attribute on the page or its nearest `Parent` ancestor.
fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>> {
    let mut dict = doc.get_dictionary(page_id)?;

    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(value) = dict.get(key) {
            return Ok(Some(value));
        }
        let Ok(parent_id) = dict.get(b"Parent").and_then(Object::as_reference) else {
            return Ok(None);
        };
        dict = doc.get_dictionary(parent_id)?;
    }

    Ok(None)
}

// =============================================================================
// XObject Creation
// =============================================================================

/// Create a Form XObject from a page.
///
/// The XObject's BBox is the visible page box and its coordinate space is
/// the page's own, so drawing it with `Do` reproduces the visible page as
/// vector content, clipped like a viewer would clip it.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The document containing the page
/// * `page_id` - The object ID of the page
/// * `cache` - Source-to-output ID map, shared across pages of one source
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_box = get_page_box(source, page_id)?;
    let page_dict = source.get_dictionary(page_id)?;
    let content_data = get_page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("BBox", Object::Array(page_box.to_array()));
    xobject_dict.set("FormType", Object::Integer(1));

    if let Some(resources) = inherited_attribute(source, page_id, b"Resources")? {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            Object::Array(arr) => get_concatenated_content_streams(doc, arr),
            _ => get_single_content_stream(doc, *id),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

/// Get content from a single content stream reference
fn get_single_content_stream(doc: &Document, id: ObjectId) -> Result<Vec<u8>> {
    if let Ok(stream) = doc.get_object(id)?.as_stream() {
        Ok(stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone()))
    } else {
        Ok(Vec::new())
    }
}

/// Concatenate multiple content streams
fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            result.extend_from_slice(&get_single_content_stream(doc, *id)?);
            result.push(b'\n');
        }
    }

    Ok(result)
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// The output ID is reserved before the referenced object is copied, so
/// reference cycles terminate.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        // Page-tree back-links would drag the whole source tree along
        if key.as_slice() == b"Parent" {
            continue;
        }
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}
