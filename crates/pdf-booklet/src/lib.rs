pub mod classify;
pub mod constants;
mod options;
mod page;
pub mod pipeline;
pub mod render;
mod types;

pub use classify::find_single_pages;
#[cfg(feature = "render")]
pub use pipeline::load_pages;
pub use pipeline::{
    Booklet, arrange_pages, dump_pages, make_booklet, make_booklet_sync, save_pages,
};
pub use options::*;
pub use page::*;
pub use types::*;
