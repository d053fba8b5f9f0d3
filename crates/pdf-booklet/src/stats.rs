use crate::constants::{SIDES_PER_SHEET, SLOTS_PER_SHEET};
use crate::options::BookletOptions;
use crate::types::*;

/// Calculate statistics for a booklet run over `source_pages` pages.
///
/// Matches what `impose_batched` produces for the same options without
/// touching any document.
pub fn calculate_statistics(
    source_pages: usize,
    options: &BookletOptions,
) -> Result<BookletStatistics> {
    options.validate()?;

    let total_entries = source_pages + options.leading_blanks;

    let batch_sizes: Vec<usize> = match options.batch_size {
        _ if total_entries == 0 => Vec::new(),
        Some(size) => (0..total_entries)
            .step_by(size)
            .map(|start| size.min(total_entries - start))
            .collect(),
        None => vec![total_entries],
    };

    let sheets_per_booklet: Vec<usize> = batch_sizes
        .iter()
        .map(|entries| entries.div_ceil(SLOTS_PER_SHEET))
        .collect();
    let output_sheets: usize = sheets_per_booklet.iter().sum();

    Ok(BookletStatistics {
        source_pages,
        leading_blanks: options.leading_blanks,
        booklets: sheets_per_booklet.len(),
        sheets_per_booklet,
        output_sheets,
        output_pages: output_sheets * SIDES_PER_SHEET,
        empty_slots: output_sheets * SLOTS_PER_SHEET - total_entries,
    })
}
