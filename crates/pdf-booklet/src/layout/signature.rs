//! Booklet imposition
//!
//! Assigns a linear page sequence to sheet slots so that the stacked sheets,
//! folded once down the middle, read in order.
//!
//! To see why the order works: take three landscape sheets, number them 0 to
//! 2 starting with the bottom one, fold the stack to form a booklet, and
//! number the halves as you read it.
//!
//! ```text
//! 1 sheet, 4 pages:
//!
//!   back:  ┌────┬────┐      front: ┌────┬────┐
//!          │ 4  │ 1  │             │ 2  │ 3  │
//!          └────┴────┘             └────┴────┘
//! ```
//!
//! Pages are consumed going down the stack on the first half of the booklet
//! (back-right then front-left of each sheet) and coming back up on the
//! second half (front-right then back-left, last sheet first).

use std::iter::FusedIterator;

use crate::constants::SLOTS_PER_SHEET;

use super::{Booklet, LogicalPage, Slot};

// =============================================================================
// Visitation Order
// =============================================================================

/// The order in which slots consume input pages.
///
/// Yields `(sheet, slot)` pairs, exactly `4 × sheet_count` of them:
/// - sheets `0..N` ascending: `BackRight`, `FrontLeft`
/// - sheets `N..0` descending: `FrontRight`, `BackLeft`
///
/// Cloning the iterator, or building a new one, restarts the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitationOrder {
    sheet_count: usize,
    front: usize,
    back: usize,
}

impl VisitationOrder {
    pub fn new(sheet_count: usize) -> Self {
        Self {
            sheet_count,
            front: 0,
            back: sheet_count * SLOTS_PER_SHEET,
        }
    }

    pub fn sheet_count(&self) -> usize {
        self.sheet_count
    }

    /// The slot at `position` in the visitation order
    fn slot_at(&self, position: usize) -> (usize, Slot) {
        let descent = self.sheet_count * 2;
        if position < descent {
            let sheet = position / 2;
            if position % 2 == 0 {
                (sheet, Slot::BackRight)
            } else {
                (sheet, Slot::FrontLeft)
            }
        } else {
            let offset = position - descent;
            let sheet = self.sheet_count - 1 - offset / 2;
            if offset % 2 == 0 {
                (sheet, Slot::FrontRight)
            } else {
                (sheet, Slot::BackLeft)
            }
        }
    }
}

impl Iterator for VisitationOrder {
    type Item = (usize, Slot);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.slot_at(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for VisitationOrder {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.slot_at(self.back))
    }
}

impl ExactSizeIterator for VisitationOrder {}

impl FusedIterator for VisitationOrder {}

// =============================================================================
// Imposition
// =============================================================================

/// Impose a page sequence onto `ceil(len / 4)` sheets.
///
/// `None` entries are blank placeholders: they consume a slot like a page
/// and render as empty space. Slots left over after the last entry stay
/// `SlotContent::Empty`.
pub fn impose<H>(pages: Vec<Option<LogicalPage<H>>>) -> Booklet<H> {
    let sheet_count = pages.len().div_ceil(SLOTS_PER_SHEET);
    let mut booklet = Booklet::with_sheets(sheet_count);

    for ((sheet, slot), entry) in VisitationOrder::new(sheet_count).zip(pages) {
        booklet.place(sheet, slot, entry.into());
    }

    booklet
}

/// Prepend `count` blank placeholders to a page sequence
pub fn with_leading_blanks<H>(
    pages: impl IntoIterator<Item = LogicalPage<H>>,
    count: usize,
) -> Vec<Option<LogicalPage<H>>> {
    std::iter::repeat_with(|| None)
        .take(count)
        .chain(pages.into_iter().map(Some))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
