//! Human-readable printing instructions

use crate::types::PrintOrder;

/// Printing instructions for `sheet_count` sheets composited in `order`.
///
/// Output page numbers are 1-based. In the grouped order pages `1..=S` are
/// the back sides and `S+1..=2S` the front sides.
pub fn print_instructions(sheet_count: usize, order: PrintOrder) -> String {
    if sheet_count == 0 {
        return "Nothing to print: the booklet has no sheets.".to_string();
    }

    match order {
        PrintOrder::Grouped => format!(
            "Print pages {} to {} (however many copies you need).\n\
             Put them back in, rotated/flipped in order to print on the other side.\n\
             Print pages {} to {}.",
            1,
            sheet_count,
            sheet_count + 1,
            sheet_count * 2
        ),
        PrintOrder::Interleaved => format!(
            "Print pages {} to {} double-sided, flipping on the short edge.",
            1,
            sheet_count * 2
        ),
    }
}
