//! Blank page padding and placement

use crate::constants::PAGES_PER_SHEET;
use crate::page::Page;
use crate::types::*;
use log::info;

/// Number of blanks needed to fill the last sheet
pub fn blank_count(pages: usize) -> usize {
    (PAGES_PER_SHEET - pages % PAGES_PER_SHEET) % PAGES_PER_SHEET
}

/// Append blank pages until the page count is a multiple of a sheet.
pub fn add_blank(mut pages: Vec<Page>) -> Result<Vec<Page>> {
    let Some(last) = pages.last() else {
        return Err(BookletError::InvalidGeometry(
            "no pages to pad".to_string(),
        ));
    };

    let count = blank_count(pages.len());
    info!(
        "original number of pages: {}, number of blank pages to add: {}",
        pages.len(),
        count
    );
    let blank = last.blank();
    pages.extend(std::iter::repeat_n(blank, count));
    Ok(pages)
}

/// Move the last content page behind the trailing blanks.
///
/// The back cover then stays the physically last page of the booklet.
/// Sequences without trailing blanks, or made only of blanks, are
/// returned unchanged.
pub fn move_last_page_after_blank(mut pages: Vec<Page>) -> Vec<Page> {
    if !pages.last().is_some_and(Page::is_blank) {
        return pages;
    }
    let Some(index) = pages.iter().rposition(|page| !page.is_blank()) else {
        return pages;
    };

    info!("move last page {} after the blank pages", pages[index]);
    let last = pages.remove(index);
    pages.push(last);
    pages
}
