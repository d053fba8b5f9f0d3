//! Logical pages of the source document

use crate::constants::GEOMETRY_TOLERANCE_PT;
use crate::layout::LogicalPage;
use crate::render::get_page_dimensions;
use crate::types::*;
use lopdf::{Document, ObjectId};

/// Source pages in document order, and the geometry of the run.
///
/// The first page's size is the canonical geometry; a document without pages
/// gets the default page size. Under `GeometryPolicy::Strict` any page
/// whose size differs from the first fails the run.
pub fn collect_pages(
    source: &Document,
    policy: GeometryPolicy,
) -> Result<(Vec<LogicalPage<ObjectId>>, Geometry)> {
    let pages = source
        .get_pages()
        .into_values()
        .map(|page_id| {
            let (width, height) = get_page_dimensions(source, page_id)?;
            Ok(LogicalPage::new(page_id, width, height))
        })
        .collect::<Result<Vec<_>>>()?;

    let geometry = pages
        .first()
        .map(|page| Geometry::new(page.width, page.height))
        .unwrap_or_default();

    let mut mismatched = pages
        .iter()
        .enumerate()
        .filter(|(_, page)| !geometry.matches(page.width, page.height, GEOMETRY_TOLERANCE_PT));

    match policy {
        GeometryPolicy::Strict => {
            if let Some((index, page)) = mismatched.next() {
                return Err(BookletError::GeometryMismatch {
                    page: index + 1,
                    expected: (geometry.width, geometry.height),
                    found: (page.width, page.height),
                });
            }
        }
        GeometryPolicy::FirstPage => {
            let count = mismatched.count();
            if count > 0 {
                log::warn!(
                    "{} page(s) differ from the first page's {}x{}pt and will not fill their half exactly",
                    count,
                    geometry.width,
                    geometry.height
                );
            }
        }
    }

    Ok((pages, geometry))
}
