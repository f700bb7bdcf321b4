//! Splitting of double pages into physical pages

use crate::page::Page;
use crate::types::*;
use log::info;

/// Replace every page flagged as double with its left and right halves.
///
/// `single_flags` comes from the classifier: `true` keeps the page as is.
pub fn split_pages(pages: Vec<Page>, single_flags: &[bool]) -> Result<Vec<Page>> {
    if pages.len() != single_flags.len() {
        return Err(BookletError::Config(format!(
            "{} classification flags for {} pages",
            single_flags.len(),
            pages.len()
        )));
    }

    let doubles = single_flags.iter().filter(|&&single| !single).count();
    info!("split pages: {} of {} are double", doubles, pages.len());

    let mut result = Vec::with_capacity(pages.len() + doubles);
    for (page, &single) in pages.into_iter().zip(single_flags) {
        if single {
            result.push(page);
        } else {
            let (left, right) = page.split()?;
            result.push(left);
            result.push(right);
        }
    }
    Ok(result)
}
