//! Alignment of split double pages across the center fold
//!
//! The innermost spread of the booklet is printed as one unbroken sheet
//! side. It must hold either two unrelated pages or the left and right
//! halves of one scanned double page, in that order. Blanks are added or
//! moved until that holds.

use super::sequence::rearrange_pages;
use crate::constants::ALIGNMENT_BLANKS;
use crate::page::{Page, PagePosition};
use crate::types::*;
use log::{debug, info};

/// True when the pair keeps physical pages together.
pub fn is_aligned(left: &Page, right: &Page) -> bool {
    match (left.parent(), right.parent()) {
        (None, None) => true,
        (Some(left_parent), Some(right_parent)) => {
            left_parent == right_parent
                && left.position() == PagePosition::Left
                && right.position() == PagePosition::Right
        }
        _ => false,
    }
}

/// Add or move blank pages until the last sheet pair is aligned.
pub fn align_double_pages(pages: Vec<Page>) -> Result<Vec<Page>> {
    align_with_rounds(pages).map(|(pages, _)| pages)
}

/// Upper bound on correction rounds for a sequence of `len` pages
fn max_rounds(len: usize) -> usize {
    2 * len + 2 * ALIGNMENT_BLANKS
}

/// Align and report how many corrections were needed.
pub(crate) fn align_with_rounds(mut pages: Vec<Page>) -> Result<(Vec<Page>, usize)> {
    info!("align double pages");
    let limit = max_rounds(pages.len());

    for round in 0..=limit {
        let pairs = rearrange_pages(&pages);
        debug!(
            "pairs: {}",
            pairs
                .iter()
                .map(|(left, right)| format!("({}, {})", left, right))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let Some((left, right)) = pairs.last() else {
            return Err(BookletError::InvalidGeometry(
                "need at least two pages to align".to_string(),
            ));
        };
        if is_aligned(left, right) {
            return Ok((pages, round));
        }

        // A pair exists, so there are at least two pages
        let last = &pages[pages.len() - 1];
        if last.is_blank() {
            info!("moving blank page to align double pages");
            let blank = last.clone();
            pages.pop();
            pages.insert(1, blank);
        } else {
            info!("adding {} blank pages to align double pages", ALIGNMENT_BLANKS);
            let blank = last.blank();
            pages.extend(std::iter::repeat_n(blank, ALIGNMENT_BLANKS));
        }
    }

    Err(BookletError::Alignment { rounds: limit })
}
