//! Splitting long documents into independent signatures

use std::num::NonZeroUsize;

use super::{Booklet, LogicalPage, impose};

/// Impose `pages` as consecutive signatures of at most `batch_size` entries.
///
/// Each chunk is imposed on its own and becomes an independently folded
/// booklet; pages never move across chunk boundaries. With `batch_size` of
/// `None` the whole sequence is one booklet. An empty sequence yields no
/// booklets.
///
/// Chunk sizes that are not a multiple of four leave empty slots inside the
/// earlier booklets; `BookletOptions::validate` rejects them for whole runs.
pub fn impose_batched<H>(
    pages: Vec<Option<LogicalPage<H>>>,
    batch_size: Option<NonZeroUsize>,
) -> Vec<Booklet<H>> {
    if pages.is_empty() {
        return Vec::new();
    }

    let Some(size) = batch_size.map(NonZeroUsize::get) else {
        return vec![impose(pages)];
    };

    let mut booklets = Vec::with_capacity(pages.len().div_ceil(size));
    let mut pages = pages.into_iter().peekable();
    while pages.peek().is_some() {
        let chunk: Vec<_> = pages.by_ref().take(size).collect();
        booklets.push(impose(chunk));
    }
    booklets
}
