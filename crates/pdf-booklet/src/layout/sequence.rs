//! Print order of composited sheet sides

use crate::types::PrintOrder;

use super::{Booklet, SheetSideView};

/// Sheet sides of all booklets in the order they are composited and printed.
///
/// `Grouped` yields every back side (across all booklets) followed by every
/// front side, so a manual duplex run prints one stack, reinserts it and
/// prints the other. `Interleaved` yields back then front for each sheet.
pub fn print_sequence<H>(booklets: &[Booklet<H>], order: PrintOrder) -> Vec<SheetSideView<'_, H>> {
    let sheets = || booklets.iter().flat_map(|booklet| booklet.sheets());

    match order {
        PrintOrder::Grouped => sheets()
            .map(|sheet| sheet.back())
            .chain(sheets().map(|sheet| sheet.front()))
            .collect(),
        PrintOrder::Interleaved => sheets()
            .flat_map(|sheet| [sheet.back(), sheet.front()])
            .collect(),
    }
}
