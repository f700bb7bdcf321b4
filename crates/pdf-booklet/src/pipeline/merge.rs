//! Spread assembly

use crate::page::Page;
use log::info;

/// Merge every pair into one double-wide spread.
pub fn pairs_to_pages(pairs: &[(Page, Page)]) -> Vec<Page> {
    info!("merge {} page pairs into spreads", pairs.len());
    pairs
        .iter()
        .map(|(left, right)| Page::merge(left, right))
        .collect()
}
