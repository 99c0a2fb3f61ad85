//! The five-dot constellation motif

use crate::constants::{DOT_RADIUS_RATIO, MOTIF_OFFSETS};
use crate::render::Canvas;
use crate::types::Point;

/// Points of one constellation anchored at `anchor`, scaled by `size`.
pub fn constellation(anchor: Point, size: f64) -> [Point; 5] {
    MOTIF_OFFSETS.map(|(dx, dy)| Point::new(anchor.x + dx * size, anchor.y + dy * size))
}

/// Radius of each dot for a motif of the given size
pub fn dot_radius(size: f64) -> f64 {
    size * DOT_RADIUS_RATIO
}

/// Draw one constellation as five filled and stroked circles.
///
/// Color and alpha must already be set on the canvas.
pub fn draw_motif(canvas: &mut Canvas, anchor: Point, size: f64) {
    let r = dot_radius(size);
    for p in constellation(anchor, size) {
        canvas.circle(p.x, p.y, r);
    }
}
