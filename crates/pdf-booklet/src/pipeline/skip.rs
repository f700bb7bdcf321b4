//! Removal of unwanted source pages

use crate::page::Page;
use log::info;

/// Drop the pages whose 1-based numbers appear in `to_skip`.
///
/// Numbers outside the document are ignored.
pub fn skip_pages(pages: Vec<Page>, to_skip: &[usize]) -> Vec<Page> {
    if to_skip.is_empty() {
        return pages;
    }
    info!("skip pages: {:?}", to_skip);
    pages
        .into_iter()
        .enumerate()
        .filter(|(index, _)| !to_skip.contains(&(index + 1)))
        .map(|(_, page)| page)
        .collect()
}
