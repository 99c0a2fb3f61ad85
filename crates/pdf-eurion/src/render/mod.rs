//! PDF rendering modules for the overlay
//!
//! This module handles all PDF-specific operations:
//! - Building content streams for the motif grid
//! - Rendering the standalone overlay document
//! - Creating XObjects from pages and deep copying PDF objects

mod canvas;
mod overlay;
mod page;
mod xobject;

pub use canvas::{Canvas, fmt_num};
pub use overlay::{overlay_content, render_overlay};
pub use page::{add_page, finish_document};
pub use xobject::{
    PageBox, PageGeometry, copy_object_deep, create_page_xobject, get_media_box, get_page_box,
    get_page_geometry, get_page_rotation,
};
