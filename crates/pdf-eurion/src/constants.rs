//! Shared constants for the Eurion overlay
//!
//! This module centralizes the fixed geometry and the defaults used
//! throughout the overlay process.

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f64 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f64 = 792.0;

/// Fallback when neither the page nor any ancestor declares a MediaBox
pub const DEFAULT_PAGE_DIMENSIONS: (f64, f64) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Constellation Geometry
// =============================================================================

/// Offsets of the five dots, in multiples of the motif size.
pub const MOTIF_OFFSETS: [(f64, f64); 5] = [
    (0.0, 0.0),
    (1.5, -0.5),
    (3.0, -1.0),
    (2.0, 1.0),
    (4.0, 0.5),
];

/// Dot radius as a fraction of the motif size
pub const DOT_RADIUS_RATIO: f64 = 0.2;

/// Smallest allowed distance between grid anchors (points)
pub const MIN_SPACING_PT: f64 = 10.0;

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_COLOR_HEX: &str = "A0A0A0";
pub const DEFAULT_DENSITY_X: u32 = 25;
pub const DEFAULT_DENSITY_Y: u32 = 55;
/// Motif size as the whole number of points the command line accepts
pub const DEFAULT_MOTIF_SIZE: u32 = 5;
pub const DEFAULT_SIZE: f64 = DEFAULT_MOTIF_SIZE as f64;
pub const DEFAULT_OPACITY: f64 = 0.1;

// =============================================================================
// Bezier Curve Constants
// =============================================================================

/// Control point factor for approximating circles with Bezier curves.
/// This magic number comes from: 4 * (sqrt(2) - 1) / 3 ≈ 0.552284749831
pub const BEZIER_CIRCLE_FACTOR: f64 = 0.552284749831;

// =============================================================================
// Resource Names
// =============================================================================

/// Graphics state carrying the overlay alpha
pub const OVERLAY_GSTATE_NAME: &str = "GS0";

/// XObject name of the embedded source page on an output page
pub const PAGE_XOBJECT_NAME: &str = "Page";

/// XObject name of the embedded overlay on an output page
pub const OVERLAY_XOBJECT_NAME: &str = "Overlay";

/// Guard against malformed page trees with `Parent` cycles
pub const MAX_PAGE_TREE_DEPTH: usize = 64;
