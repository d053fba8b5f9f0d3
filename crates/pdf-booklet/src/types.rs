use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("Cannot read source document {}: {reason}", .path.display())]
    SourceUnreadable { path: PathBuf, reason: String },
    #[error("Cannot write booklet to {}: {reason}", .path.display())]
    DestinationUnwritable { path: PathBuf, reason: String },
    #[error(
        "Page {page} is {:.1}x{:.1}pt but the booklet geometry is {:.1}x{:.1}pt",
        .found.0, .found.1, .expected.0, .expected.1
    )]
    GeometryMismatch {
        /// 1-based page number in the source document
        page: usize,
        expected: (f32, f32),
        found: (f32, f32),
    },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Order in which composited sheet sides are appended to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrintOrder {
    /// All back sides first, then all front sides (manual duplex: print one
    /// stack, reinsert it, print the other)
    #[default]
    Grouped,
    /// Back then front for each sheet (automatic duplex)
    Interleaved,
}

/// What to do when source pages do not all share the first page's size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryPolicy {
    /// Use the first page's size for the whole run; differently sized pages
    /// are drawn unscaled and may overflow or underflow their half
    #[default]
    FirstPage,
    /// Fail with `GeometryMismatch` on the first page whose size differs
    Strict,
}

/// Size of one logical page in points. Output pages are twice as wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
}

impl Geometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Dimensions of a composited sheet side: (2W, H)
    pub fn output_size(self) -> (f32, f32) {
        (self.width * 2.0, self.height)
    }

    /// Whether `(width, height)` matches this geometry within `tolerance` points
    pub fn matches(self, width: f32, height: f32, tolerance: f32) -> bool {
        (self.width - width).abs() <= tolerance && (self.height - height).abs() <= tolerance
    }
}

impl Default for Geometry {
    fn default() -> Self {
        let (width, height) = crate::constants::DEFAULT_PAGE_DIMENSIONS;
        Self { width, height }
    }
}

/// Statistics about a booklet run
#[derive(Debug, Clone, PartialEq)]
pub struct BookletStatistics {
    /// Number of pages in the source document
    pub source_pages: usize,
    /// Blank placeholders prepended before imposition
    pub leading_blanks: usize,
    /// Number of independently folded booklets (signatures)
    pub booklets: usize,
    /// Sheet count of each booklet, in order
    pub sheets_per_booklet: Vec<usize>,
    /// Total physical sheets
    pub output_sheets: usize,
    /// Output page count (front and back of every sheet)
    pub output_pages: usize,
    /// Slots left empty at the end of booklets
    pub empty_slots: usize,
}
