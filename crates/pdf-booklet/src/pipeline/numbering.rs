//! First page numbering

use crate::page::Page;
use crate::types::*;
use log::info;

/// Number of the declared first page once the skipped pages are removed.
///
/// Fails when the first page itself is skipped. Duplicate skip entries
/// count once.
pub fn effective_first_page(first_page: usize, skip: &[usize]) -> Result<usize> {
    if first_page == 0 {
        return Err(BookletError::Config(
            "first page numbers start at 1".to_string(),
        ));
    }
    if skip.contains(&first_page) {
        return Err(BookletError::Config(format!(
            "first page {} is marked for skipping",
            first_page
        )));
    }

    let mut skipped_before: Vec<usize> = skip
        .iter()
        .copied()
        .filter(|&page| page < first_page)
        .collect();
    skipped_before.sort_unstable();
    skipped_before.dedup();
    Ok(first_page - skipped_before.len())
}

/// Insert a blank after the title page when the first numbered page
/// would otherwise be printed on an even page.
pub fn adjust_first_page(
    mut pages: Vec<Page>,
    first_page: FirstPage,
    skip: &[usize],
) -> Result<Vec<Page>> {
    let FirstPage::Page(number) = first_page else {
        return Ok(pages);
    };

    let effective = effective_first_page(number, skip)?;
    if effective % 2 == 0 {
        let Some(title) = pages.first() else {
            return Err(BookletError::InvalidGeometry(
                "no pages to number".to_string(),
            ));
        };
        info!(
            "first page {} lands on an even page, inserting a blank after the title",
            effective
        );
        let blank = title.blank();
        pages.insert(1, blank);
    }
    Ok(pages)
}
