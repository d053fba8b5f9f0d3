//! Shared constants for booklet imposition

// =============================================================================
// Sheet Layout
// =============================================================================

/// Logical pages carried by one folded sheet (two per side, two sides)
pub const SLOTS_PER_SHEET: usize = 4;

/// Composited output pages per sheet (back and front)
pub const SIDES_PER_SHEET: usize = 2;

// =============================================================================
// Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Default page dimensions as tuple (width, height).
/// Used when a page has no readable MediaBox or the run has no real pages.
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

/// Size difference (points) still treated as the same geometry
pub const GEOMETRY_TOLERANCE_PT: f32 = 0.5;

// =============================================================================
// Output
// =============================================================================

/// Prefix of the default output file name
pub const OUTPUT_FILE_PREFIX: &str = "booklet_";

/// PDF version written for composited documents
pub const OUTPUT_PDF_VERSION: &str = "1.7";
