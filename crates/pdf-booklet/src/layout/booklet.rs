//! Booklet storage
//!
//! A booklet keeps all of its slots in one flat arena, four per sheet,
//! indexed by `(sheet, slot)`. Sheets are borrowed views into that arena.

use crate::constants::SLOTS_PER_SHEET;

use super::signature::VisitationOrder;
use super::{Half, SheetSide, SheetSideView, Slot, SlotContent};

/// Sheets produced by one `impose` call.
///
/// Populated once during imposition and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Booklet<H> {
    slots: Vec<SlotContent<H>>,
}

impl<H> Booklet<H> {
    /// A booklet of `sheet_count` sheets with every slot empty
    pub(super) fn with_sheets(sheet_count: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| SlotContent::Empty)
                .take(sheet_count * SLOTS_PER_SHEET)
                .collect(),
        }
    }

    /// Store `content` in a slot. Out-of-range positions are ignored.
    pub(super) fn place(&mut self, sheet: usize, slot: Slot, content: SlotContent<H>) {
        if let Some(entry) = slot_index(sheet, slot).and_then(|i| self.slots.get_mut(i)) {
            *entry = content;
        }
    }

    pub fn sheet_count(&self) -> usize {
        self.slots.len() / SLOTS_PER_SHEET
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Content of one slot, or `None` if `sheet` is out of range
    pub fn get(&self, sheet: usize, slot: Slot) -> Option<&SlotContent<H>> {
        self.slots.get(slot_index(sheet, slot)?)
    }

    pub fn sheet(&self, index: usize) -> Option<Sheet<'_, H>> {
        let start = index.checked_mul(SLOTS_PER_SHEET)?;
        let slots = self.slots.get(start..start.checked_add(SLOTS_PER_SHEET)?)?;
        Some(Sheet { index, slots })
    }

    pub fn sheets(&self) -> impl ExactSizeIterator<Item = Sheet<'_, H>> + '_ {
        self.slots
            .chunks_exact(SLOTS_PER_SHEET)
            .enumerate()
            .map(|(index, slots)| Sheet { index, slots })
    }

    /// Walk the slots in folding order.
    ///
    /// This is the order in which a reader meets the pages of the folded
    /// booklet, so it reproduces the imposed input (blanks included)
    /// followed by any trailing empty slots.
    pub fn reading_order(&self) -> Vec<&SlotContent<H>> {
        VisitationOrder::new(self.sheet_count())
            .filter_map(|(sheet, slot)| self.get(sheet, slot))
            .collect()
    }

    /// Number of slots holding a real page
    pub fn page_count(&self) -> usize {
        self.slots.iter().filter(|s| s.page().is_some()).count()
    }

    /// Number of slots no input entry reached
    pub fn empty_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_empty()).count()
    }
}

/// One physical sheet of a booklet
#[derive(Debug)]
pub struct Sheet<'a, H> {
    index: usize,
    slots: &'a [SlotContent<H>],
}

impl<'a, H> Sheet<'a, H> {
    /// Index of the sheet within its booklet (0 = outermost)
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, slot: Slot) -> &'a SlotContent<H> {
        &self.slots[slot.offset()]
    }

    pub fn side(&self, side: SheetSide) -> SheetSideView<'a, H> {
        SheetSideView {
            side,
            left: self.get(Slot::new(side, Half::Left)),
            right: self.get(Slot::new(side, Half::Right)),
        }
    }

    pub fn front(&self) -> SheetSideView<'a, H> {
        self.side(SheetSide::Front)
    }

    pub fn back(&self) -> SheetSideView<'a, H> {
        self.side(SheetSide::Back)
    }
}

impl<H> Clone for Sheet<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for Sheet<'_, H> {}

fn slot_index(sheet: usize, slot: Slot) -> Option<usize> {
    sheet
        .checked_mul(SLOTS_PER_SHEET)?
        .checked_add(slot.offset())
}
