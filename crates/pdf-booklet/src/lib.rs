pub mod constants;
mod instructions;
pub mod layout;
mod options;
pub mod pipeline;
pub mod render;
mod stats;
mod types;

pub use instructions::print_instructions;
pub use layout::{
    Booklet, LogicalPage, SheetSide, Slot, SlotContent, VisitationOrder, impose, impose_batched,
};
pub use options::*;
pub use pipeline::{
    BookletOutput, BookletReport, load_pdf, make_booklet, make_booklet_file,
    make_booklet_sync, make_booklet_with_progress, save_pdf,
};
pub use render::Compositor;
pub use stats::calculate_statistics;
pub use types::*;
