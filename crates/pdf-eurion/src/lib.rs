pub mod compose;
pub mod constants;
mod color;
pub mod layout;
pub mod motif;
mod options;
pub mod render;
mod stats;
mod types;

pub use color::parse_hex_color;
pub use compose::{apply_overlay, load_pdf, overlay_file, save_pdf};
pub use layout::{GridAnchors, grid_anchors, grid_spacing, page_anchors};
pub use motif::{constellation, dot_radius, draw_motif};
pub use options::*;
pub use render::{Canvas, render_overlay};
pub use stats::calculate_statistics;
pub use types::*;
