//! Layout data types for booklet imposition
//!
//! These types describe where each logical page lands on the physical
//! sheets before any PDF rendering happens.

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetSide {
    /// Inside of the folded sheet
    Front,
    /// Outside of the folded sheet (printed first in the grouped order)
    Back,
}

/// Which half of a sheet side, left or right of the fold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Half {
    Left,
    Right,
}

/// One of the four page positions on a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    FrontLeft = 0,
    FrontRight = 1,
    BackLeft = 2,
    BackRight = 3,
}

impl Slot {
    /// All slots in arena order
    pub const ALL: [Slot; 4] = [
        Slot::FrontLeft,
        Slot::FrontRight,
        Slot::BackLeft,
        Slot::BackRight,
    ];

    pub fn new(side: SheetSide, half: Half) -> Self {
        match (side, half) {
            (SheetSide::Front, Half::Left) => Slot::FrontLeft,
            (SheetSide::Front, Half::Right) => Slot::FrontRight,
            (SheetSide::Back, Half::Left) => Slot::BackLeft,
            (SheetSide::Back, Half::Right) => Slot::BackRight,
        }
    }

    pub fn side(self) -> SheetSide {
        match self {
            Slot::FrontLeft | Slot::FrontRight => SheetSide::Front,
            Slot::BackLeft | Slot::BackRight => SheetSide::Back,
        }
    }

    pub fn half(self) -> Half {
        match self {
            Slot::FrontLeft | Slot::BackLeft => Half::Left,
            Slot::FrontRight | Slot::BackRight => Half::Right,
        }
    }

    /// Position of this slot within a sheet's four-slot block
    pub(crate) fn offset(self) -> usize {
        self as usize
    }
}

/// One page of the source content and its size in points.
///
/// `H` is an opaque handle chosen by the caller; the PDF pipeline uses the
/// source page's `lopdf::ObjectId`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalPage<H> {
    pub handle: H,
    pub width: f32,
    pub height: f32,
}

impl<H> LogicalPage<H> {
    pub fn new(handle: H, width: f32, height: f32) -> Self {
        Self {
            handle,
            width,
            height,
        }
    }
}

/// What a slot holds after imposition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotContent<H> {
    /// No input entry reached this slot (trailing space in the last sheets)
    Empty,
    /// A blank placeholder consumed this slot
    Blank,
    /// A real page
    Page(LogicalPage<H>),
}

impl<H> SlotContent<H> {
    pub fn page(&self) -> Option<&LogicalPage<H>> {
        match self {
            SlotContent::Page(page) => Some(page),
            SlotContent::Empty | SlotContent::Blank => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SlotContent::Empty)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, SlotContent::Blank)
    }
}

impl<H> From<Option<LogicalPage<H>>> for SlotContent<H> {
    fn from(entry: Option<LogicalPage<H>>) -> Self {
        match entry {
            Some(page) => SlotContent::Page(page),
            None => SlotContent::Blank,
        }
    }
}

/// The two halves of one sheet side, as handed to the compositor
#[derive(Debug, PartialEq)]
pub struct SheetSideView<'a, H> {
    pub side: SheetSide,
    pub left: &'a SlotContent<H>,
    pub right: &'a SlotContent<H>,
}

// Manual impls: deriving would require `H: Clone`/`H: Copy`.
impl<H> Clone for SheetSideView<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for SheetSideView<'_, H> {}
