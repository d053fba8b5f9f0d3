//! Geometry of a composited sheet side

use crate::layout::{Half, LogicalPage, SheetSideView};
use crate::types::Geometry;

/// Where one logical page is drawn on a double-wide output page
#[derive(Debug, PartialEq)]
pub struct Placement<'a, H> {
    pub page: &'a LogicalPage<H>,
    pub half: Half,
    /// Translation of the page's origin in output page space
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Everything needed to draw one sheet side
#[derive(Debug, PartialEq)]
pub struct SidePlan<'a, H> {
    pub width: f32,
    pub height: f32,
    /// Left half first; halves without a page are omitted
    pub placements: Vec<Placement<'a, H>>,
}

impl<H> SidePlan<'_, H> {
    /// A side with nothing to draw
    pub fn is_blank(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Lay out a sheet side: the left page at the origin, the right page shifted
/// right by one page width. Pages are never scaled or rotated.
pub fn plan_side<'a, H>(side: SheetSideView<'a, H>, geometry: Geometry) -> SidePlan<'a, H> {
    let (width, height) = geometry.output_size();

    let placements = [(Half::Left, side.left), (Half::Right, side.right)]
        .into_iter()
        .filter_map(|(half, content)| {
            let page = content.page()?;
            let offset_x = match half {
                Half::Left => 0.0,
                Half::Right => geometry.width,
            };
            Some(Placement {
                page,
                half,
                offset_x,
                offset_y: 0.0,
            })
        })
        .collect();

    SidePlan {
        width,
        height,
        placements,
    }
}
