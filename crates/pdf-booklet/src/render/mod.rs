//! PDF rendering for booklet output
//!
//! This module handles all PDF-specific operations:
//! - Laying out the two halves of a sheet side
//! - Creating XObjects from source pages
//! - Building composited output pages
//! - Deep copying PDF objects

mod output;
mod page;
mod placement;
mod xobject;

pub use output::OutputDocument;
pub use page::Compositor;
pub use placement::{Placement, SidePlan, plan_side};
pub use xobject::{copy_object_deep, create_page_xobject, get_page_dimensions, page_media_box};
