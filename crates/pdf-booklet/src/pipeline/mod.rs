//! Booklet production - from a source PDF to a composited, print-ready PDF
//!
//! This module orchestrates a run:
//! 1. Read the source pages and settle the page geometry
//! 2. Prepend leading blanks and impose each signature
//! 3. Composite every sheet side in print order
//! 4. Save the output atomically

mod io;
mod pages;

pub use io::{load_pdf, save_pdf};
pub use pages::collect_pages;

use crate::instructions::print_instructions;
use crate::layout::{impose_batched, print_sequence, with_leading_blanks};
use crate::options::BookletOptions;
use crate::render::Compositor;
use crate::stats::calculate_statistics;
use crate::types::*;
use lopdf::Document;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Result of an in-memory booklet run
#[derive(Debug)]
pub struct BookletOutput {
    pub document: Document,
    pub statistics: BookletStatistics,
    pub instructions: String,
}

/// Result of a file-to-file booklet run
#[derive(Debug, Clone, PartialEq)]
pub struct BookletReport {
    pub output_path: PathBuf,
    pub statistics: BookletStatistics,
    pub instructions: String,
}

/// Build a booklet from an in-memory source document.
///
/// CPU-bound work runs on the blocking thread pool.
pub async fn make_booklet(source: Document, options: &BookletOptions) -> Result<BookletOutput> {
    make_booklet_with_progress(source, options, |_| {}).await
}

/// Like `make_booklet`, reporting progress as a percentage after each
/// composited sheet side
pub async fn make_booklet_with_progress<F>(
    source: Document,
    options: &BookletOptions,
    mut progress: F,
) -> Result<BookletOutput>
where
    F: FnMut(f32) + Send + 'static,
{
    options.validate()?;
    let options = options.clone();

    tokio::task::spawn_blocking(move || make_booklet_sync(&source, &options, &mut progress))
        .await?
}

/// Read, impose, composite and save according to `options`.
///
/// Fails with `SourceUnreadable` before any work if the input cannot be
/// loaded; nothing is written unless the whole run succeeds.
pub async fn make_booklet_file<F>(options: &BookletOptions, progress: F) -> Result<BookletReport>
where
    F: FnMut(f32) + Send + 'static,
{
    options.validate_paths()?;
    let output_path = options.output_path()?;

    let source = load_pdf(&options.input_file).await?;
    let BookletOutput {
        document,
        statistics,
        instructions,
    } = make_booklet_with_progress(source, options, progress).await?;
    save_pdf(document, &output_path).await?;

    Ok(BookletReport {
        output_path,
        statistics,
        instructions,
    })
}

/// Synchronous booklet run.
///
/// `progress` receives a non-decreasing percentage in `[0, 100]` after each
/// composited sheet side (once with 100 when there is nothing to composite).
/// It is purely observational.
pub fn make_booklet_sync(
    source: &Document,
    options: &BookletOptions,
    progress: &mut dyn FnMut(f32),
) -> Result<BookletOutput> {
    let (pages, geometry) = collect_pages(source, options.geometry_policy)?;
    let statistics = calculate_statistics(pages.len(), options)?;

    let entries = with_leading_blanks(pages, options.leading_blanks);
    let booklets = impose_batched(entries, options.batch_size.and_then(NonZeroUsize::new));
    let sides = print_sequence(&booklets, options.print_order);

    log::info!(
        "Imposing {} pages (+{} blanks) onto {} sheets in {} booklet(s)",
        statistics.source_pages,
        statistics.leading_blanks,
        statistics.output_sheets,
        statistics.booklets
    );

    let mut compositor = Compositor::new(source, geometry);
    let total = sides.len();
    for (done, side) in sides.into_iter().enumerate() {
        compositor.composite(side)?;
        progress((done + 1) as f32 / total as f32 * 100.0);
    }
    if total == 0 {
        progress(100.0);
    }

    Ok(BookletOutput {
        document: compositor.finish(),
        instructions: print_instructions(statistics.output_sheets, options.print_order),
        statistics,
    })
}
