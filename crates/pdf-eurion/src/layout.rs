//! Grid layout of constellation anchors
//!
//! Pure geometry: computes where motifs go on a page without touching
//! any drawing surface.

use crate::constants::MIN_SPACING_PT;
use crate::options::EurionOptions;
use crate::types::Point;

/// Horizontal and vertical distance between anchors for a page.
///
/// Each axis is `max(10, trunc(dimension) / density)`: the dimension is
/// truncated to whole points first, the quotient stays fractional, and
/// spacing never drops below [`MIN_SPACING_PT`].
pub fn grid_spacing(width: f64, height: f64, density_x: u32, density_y: u32) -> (f64, f64) {
    (
        axis_spacing(width, density_x),
        axis_spacing(height, density_y),
    )
}

fn axis_spacing(dimension: f64, density: u32) -> f64 {
    (dimension.trunc() / f64::from(density)).max(MIN_SPACING_PT)
}

/// Anchors of every motif on a `width` × `height` page, column by column.
///
/// Positions start at the origin and advance by the (fractional) spacing;
/// the page bounds are truncated to whole points before comparison, and an
/// anchor is emitted only while it is strictly below the truncated bound.
pub fn grid_anchors(width: f64, height: f64, spacing_x: f64, spacing_y: f64) -> GridAnchors {
    GridAnchors {
        bound_x: width.trunc(),
        bound_y: height.trunc(),
        spacing_x: spacing_x.max(MIN_SPACING_PT),
        spacing_y: spacing_y.max(MIN_SPACING_PT),
        x: 0.0,
        y: 0.0,
    }
}

/// Anchors for a page using the spacing derived from `options`
pub fn page_anchors(width: f64, height: f64, options: &EurionOptions) -> GridAnchors {
    let (spacing_x, spacing_y) = grid_spacing(width, height, options.density_x, options.density_y);
    grid_anchors(width, height, spacing_x, spacing_y)
}

/// Iterator over grid anchors. Cloning it restarts from the current position.
#[derive(Debug, Clone, PartialEq)]
pub struct GridAnchors {
    bound_x: f64,
    bound_y: f64,
    spacing_x: f64,
    spacing_y: f64,
    x: f64,
    y: f64,
}

impl GridAnchors {
    pub fn spacing(&self) -> (f64, f64) {
        (self.spacing_x, self.spacing_y)
    }
}

impl Iterator for GridAnchors {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        // An empty column means every column is empty
        if !(self.bound_y > 0.0) {
            return None;
        }

        while self.x < self.bound_x {
            if self.y < self.bound_y {
                let anchor = Point::new(self.x, self.y);
                self.y += self.spacing_y;
                return Some(anchor);
            }
            self.x += self.spacing_x;
            self.y = 0.0;
        }

        None
    }
}
