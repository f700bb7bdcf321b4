//! Title page placement

use crate::page::Page;
use crate::types::TitlePage;
use log::info;

/// Move the first page to the back when the title page is the second one.
///
/// In auto mode that is the case when the first source page was a double
/// page: its left half is the back cover of the scanned book.
pub fn normalize_title_page(
    mut pages: Vec<Page>,
    title_page: TitlePage,
    first_is_double: bool,
) -> Vec<Page> {
    let rotate = match title_page {
        TitlePage::Auto => first_is_double,
        TitlePage::First => false,
        TitlePage::Second => true,
    };
    if rotate && !pages.is_empty() {
        info!("title page is page 2, moving page {} to the back", pages[0]);
        pages.rotate_left(1);
    }
    pages
}
