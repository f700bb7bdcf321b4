//! Booklet imposition pipeline
//!
//! This module turns scanned pages into saddle-stitch spreads:
//! 1. Skip unwanted pages
//! 2. Detect and split double pages, place the title page
//! 3. Normalize page heights
//! 4. Pad and align with blank pages
//! 5. Pair pages into sheet sides and merge them into spreads

mod align;
mod io;
mod merge;
mod numbering;
mod padding;
mod resize;
mod sequence;
mod skip;
mod split;
mod title;

#[cfg(feature = "render")]
pub use io::load_pages;
pub use io::{dump_pages, save_pages};

pub use align::{align_double_pages, is_aligned};
pub use merge::pairs_to_pages;
pub use numbering::{adjust_first_page, effective_first_page};
pub use padding::{add_blank, blank_count, move_last_page_after_blank};
pub use resize::resize_pages;
pub use sequence::rearrange_pages;
pub use skip::skip_pages;
pub use split::split_pages;
pub use title::normalize_title_page;

use crate::classify::classify_pages;
use crate::constants::SPREADS_PER_SHEET;
use crate::options::BookletOptions;
use crate::page::Page;
use crate::types::*;

/// Spreads ready for printing plus statistics about the run
#[derive(Debug, Clone)]
pub struct Booklet {
    pub spreads: Vec<Page>,
    pub statistics: BookletStatistics,
}

/// Main booklet function
pub async fn make_booklet(pages: Vec<Page>, options: &BookletOptions) -> Result<Booklet> {
    let options = options.clone();

    tokio::task::spawn_blocking(move || make_booklet_sync(pages, &options)).await?
}

/// Run the whole pipeline on the calling thread.
pub fn make_booklet_sync(pages: Vec<Page>, options: &BookletOptions) -> Result<Booklet> {
    let (ordered, mut statistics) = arrange(pages, options)?;

    let pairs = rearrange_pages(&ordered);
    let spreads = pairs_to_pages(&pairs);

    statistics.output_spreads = spreads.len();
    statistics.output_sheets = spreads.len().div_ceil(SPREADS_PER_SHEET);
    Ok(Booklet {
        spreads,
        statistics,
    })
}

/// Run every stage up to the final page order, without pairing.
///
/// The result is a multiple of four pages long.
pub fn arrange_pages(pages: Vec<Page>, options: &BookletOptions) -> Result<Vec<Page>> {
    arrange(pages, options).map(|(pages, _)| pages)
}

fn arrange(pages: Vec<Page>, options: &BookletOptions) -> Result<(Vec<Page>, BookletStatistics)> {
    options.validate()?;

    let mut statistics = BookletStatistics {
        source_pages: pages.len(),
        ..Default::default()
    };

    let pages = skip_pages(pages, &options.skip);
    statistics.skipped_pages = statistics.source_pages - pages.len();

    let pages = match options.split_mode {
        SplitMode::Single => {
            if pages.is_empty() {
                return Err(BookletError::InvalidGeometry(
                    "no pages left to arrange".to_string(),
                ));
            }
            normalize_title_page(pages, options.title_page, false)
        }
        SplitMode::Auto | SplitMode::Double => {
            let force = options.split_mode == SplitMode::Double;
            let single_flags = classify_pages(&pages, force)?;
            statistics.double_pages = single_flags.iter().filter(|&&single| !single).count();
            let first_is_double = !single_flags[0];
            let pages = split_pages(pages, &single_flags)?;
            normalize_title_page(pages, options.title_page, first_is_double)
        }
    };
    statistics.content_pages = pages.len();

    let pages = resize_pages(pages)?;
    let pages = adjust_first_page(pages, options.first_page, &options.skip)?;
    let pages = add_blank(pages)?;
    let pages = align_double_pages(pages)?;
    let pages = if options.blank_after_last {
        pages
    } else {
        move_last_page_after_blank(pages)
    };

    statistics.blank_pages_added = pages.iter().filter(|page| page.is_blank()).count();
    Ok((pages, statistics))
}
