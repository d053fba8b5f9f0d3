//! Layout calculation for booklet imposition
//!
//! Pure page-to-slot assignment, no PDF access:
//! - Slot visitation order and the `impose` entry point
//! - Booklet storage and sheet views
//! - Splitting long documents into signatures
//! - Print order of the composited sheet sides

mod batch;
mod booklet;
mod sequence;
mod signature;
mod types;

pub use batch::*;
pub use booklet::*;
pub use sequence::*;
pub use signature::*;
pub use types::*;
