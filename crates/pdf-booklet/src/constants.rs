//! Shared constants for booklet imposition
//!
//! This module centralizes the thresholds and defaults used across the
//! pipeline stages and the document boundary.

// =============================================================================
// Sheets
// =============================================================================

/// Pages printed on one folded sheet (two per side)
pub const PAGES_PER_SHEET: usize = 4;

/// Blank pages appended per alignment round, keeps the length a multiple of a sheet
pub const ALIGNMENT_BLANKS: usize = PAGES_PER_SHEET;

/// Spreads printed per physical sheet (front and back)
pub const SPREADS_PER_SHEET: usize = 2;

// =============================================================================
// Classification
// =============================================================================

/// Two cluster centers closer than this (as a ratio) are one population
pub const CLUSTER_RATIO_TOLERANCE: f64 = 0.1;

/// Width/height ratio above which an undivided population is treated as double pages
pub const DOUBLE_PAGE_MIN_RATIO: f64 = 1.1;

// =============================================================================
// Page identity
// =============================================================================

/// Id suffix for the left half of a split page
pub const LEFT_SUFFIX: &str = "l";

/// Id suffix for the right half of a split page
pub const RIGHT_SUFFIX: &str = "r";

/// Id of synthetic blank pages
pub const BLANK_ID: &str = "blank";

/// Separator between the ids of merged pages
pub const MERGE_SEPARATOR: &str = "+";

// =============================================================================
// Document boundary
// =============================================================================

/// Default rasterization resolution (dots per inch)
pub const DEFAULT_DPI: u32 = 200;

/// Default JPEG quality for embedded spread images
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// PDF points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert a pixel length at the given resolution to points
#[inline]
pub fn px_to_pt(px: u32, dpi: u32) -> f32 {
    px as f32 * POINTS_PER_INCH / dpi as f32
}

/// Fill colour of blank pages and spread backgrounds
pub const WHITE: [u8; 3] = [255, 255, 255];
