use image::RgbImage;
use pdf_booklet::pipeline::*;
use pdf_booklet::*;

fn page(id: &str, width: u32, height: u32) -> Page {
    Page::new(id, RgbImage::new(width, height)).unwrap()
}

/// Pages numbered from 1 with the given widths and a height of 100
fn scan(widths: &[u32]) -> Vec<Page> {
    widths
        .iter()
        .enumerate()
        .map(|(i, &w)| page(&(i + 1).to_string(), w, 100))
        .collect()
}

fn ids(pages: &[Page]) -> Vec<&str> {
    pages.iter().map(Page::id).collect()
}

#[test]
fn test_classification_scenario() {
    let pages = scan(&[70, 70, 140, 70]);
    assert_eq!(
        find_single_pages(&pages).unwrap(),
        vec![true, true, false, true]
    );
}

#[test]
fn test_padding_scenario() {
    let padded = add_blank(scan(&[70; 7])).unwrap();
    assert_eq!(padded.len(), 8);
    assert_eq!(padded.iter().filter(|p| p.is_blank()).count(), 1);
}

#[test]
fn test_sequencing_scenario() {
    let pages = scan(&[70; 4]);
    let pairs = rearrange_pages(&pages);
    let pair_ids: Vec<_> = pairs.iter().map(|(l, r)| (l.id(), r.id())).collect();
    assert_eq!(pair_ids, vec![("4", "1"), ("2", "3")]);
}

#[test]
fn test_skip_scenario() {
    let pages = skip_pages(scan(&[70; 3]), &[2]);
    assert_eq!(ids(&pages), vec!["1", "3"]);
}

#[test]
fn test_uniform_scan_is_not_split() {
    let pages = scan(&[70; 5]);
    let flags = find_single_pages(&pages).unwrap();
    assert!(flags.iter().all(|&single| single));
    let split = split_pages(pages, &flags).unwrap();
    assert_eq!(ids(&split), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_mixed_booklet() {
    let booklet = make_booklet_sync(scan(&[70, 141, 70]), &BookletOptions::default()).unwrap();

    assert_eq!(ids(&booklet.spreads), vec!["3+1", "2l+2r"]);
    assert!(booklet.spreads.iter().all(|s| s.size() == (140, 100)));

    let stats = booklet.statistics;
    assert_eq!(stats.source_pages, 3);
    assert_eq!(stats.skipped_pages, 0);
    assert_eq!(stats.double_pages, 1);
    assert_eq!(stats.content_pages, 4);
    assert_eq!(stats.blank_pages_added, 0);
    assert_eq!(stats.output_spreads, 2);
    assert_eq!(stats.output_sheets, 1);
}

#[test]
fn test_double_scanned_book() {
    let booklet = make_booklet_sync(scan(&[141, 141, 141]), &BookletOptions::default()).unwrap();

    // Back cover (1l) and front cover (1r) end up on the outer sheet side
    assert_eq!(
        ids(&booklet.spreads),
        vec!["1l+1r", "2l+blank", "blank+2r", "3l+3r"]
    );
    assert_eq!(booklet.statistics.double_pages, 3);
    assert_eq!(booklet.statistics.blank_pages_added, 2);
    assert_eq!(booklet.statistics.output_sheets, 2);
}

#[test]
fn test_single_mode_moves_last_page_after_blanks() {
    let options = BookletOptions {
        split_mode: SplitMode::Single,
        ..Default::default()
    };
    let booklet = make_booklet_sync(scan(&[70, 70]), &options).unwrap();
    assert_eq!(ids(&booklet.spreads), vec!["2+1", "blank+blank"]);
}

#[test]
fn test_blank_after_last() {
    let options = BookletOptions {
        split_mode: SplitMode::Single,
        blank_after_last: true,
        ..Default::default()
    };
    let booklet = make_booklet_sync(scan(&[70, 70]), &options).unwrap();
    assert_eq!(ids(&booklet.spreads), vec!["blank+1", "2+blank"]);
}

#[test]
fn test_single_mode_ignores_wide_pages() {
    let options = BookletOptions {
        split_mode: SplitMode::Single,
        ..Default::default()
    };
    let pages = arrange_pages(scan(&[70, 141, 70, 70]), &options).unwrap();
    assert_eq!(ids(&pages), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_double_mode_splits_everything() {
    let options = BookletOptions {
        split_mode: SplitMode::Double,
        title_page: TitlePage::First,
        ..Default::default()
    };
    let pages = arrange_pages(scan(&[141, 141]), &options).unwrap();

    // (1r, 2l) in the middle straddles two scans, so blanks shift it
    assert_eq!(
        ids(&pages),
        vec!["1l", "blank", "1r", "2l", "blank", "blank", "blank", "2r"]
    );
    let content: Vec<_> = pages.iter().filter(|p| !p.is_blank()).collect();
    assert!(content.iter().all(|p| p.parent().is_some()));
}

#[test]
fn test_forced_second_title_page() {
    let options = BookletOptions {
        title_page: TitlePage::Second,
        ..Default::default()
    };
    let pages = arrange_pages(scan(&[70, 70, 70, 70]), &options).unwrap();
    assert_eq!(ids(&pages), vec!["2", "3", "4", "1"]);
}

#[test]
fn test_first_page_inserts_blank() {
    let options = BookletOptions {
        first_page: FirstPage::Page(2),
        ..Default::default()
    };
    let booklet = make_booklet_sync(scan(&[70, 70, 70]), &options).unwrap();
    assert_eq!(ids(&booklet.spreads), vec!["3+1", "blank+2"]);
}

#[test]
fn test_first_page_skipped_is_config_error() {
    let options = BookletOptions {
        first_page: FirstPage::Page(2),
        skip: vec![2],
        ..Default::default()
    };
    let result = make_booklet_sync(scan(&[70, 70, 70]), &options);
    assert!(matches!(result, Err(BookletError::Config(_))));
}

#[test]
fn test_skip_counts_in_statistics() {
    let options = BookletOptions {
        skip: vec![1, 3],
        ..Default::default()
    };
    let booklet = make_booklet_sync(scan(&[70; 6]), &options).unwrap();
    assert_eq!(booklet.statistics.source_pages, 6);
    assert_eq!(booklet.statistics.skipped_pages, 2);
    assert_eq!(booklet.statistics.content_pages, 4);
    assert_eq!(ids(&booklet.spreads), vec!["6+2", "4+5"]);
}

#[test]
fn test_resize_normalizes_heights() {
    let pages = vec![page("1", 70, 100), page("2", 35, 50), page("3", 70, 100)];
    let booklet = make_booklet_sync(pages, &BookletOptions::default()).unwrap();
    assert!(booklet.spreads.iter().all(|s| s.height() == 100));
    assert_eq!(booklet.spreads[1].size(), (140, 100));
}

#[test]
fn test_empty_document() {
    let result = make_booklet_sync(Vec::new(), &BookletOptions::default());
    assert!(matches!(result, Err(BookletError::InvalidGeometry(_))));
}

#[test]
fn test_everything_skipped() {
    let options = BookletOptions {
        skip: vec![1, 2],
        ..Default::default()
    };
    let result = make_booklet_sync(scan(&[70, 70]), &options);
    assert!(matches!(result, Err(BookletError::InvalidGeometry(_))));
}

#[test]
fn test_arranged_length_is_multiple_of_four() {
    for count in 1..12 {
        let pages = arrange_pages(scan(&vec![70; count]), &BookletOptions::default()).unwrap();
        assert_eq!(pages.len() % 4, 0, "{} pages", count);
    }
}

#[tokio::test]
async fn test_make_booklet_async() {
    let booklet = make_booklet(scan(&[70, 70, 70, 70]), &BookletOptions::default())
        .await
        .unwrap();
    assert_eq!(ids(&booklet.spreads), vec!["4+1", "2+3"]);
}

#[tokio::test]
async fn test_make_booklet_validates_options() {
    let options = BookletOptions {
        dpi: 0,
        ..Default::default()
    };
    let result = make_booklet(scan(&[70]), &options).await;
    assert!(matches!(result, Err(BookletError::Config(_))));
}

#[test]
fn test_arrange_pages_validates_options() {
    let options = BookletOptions {
        skip: vec![0],
        ..Default::default()
    };
    let result = arrange_pages(scan(&[70, 70]), &options);
    assert!(matches!(result, Err(BookletError::Config(_))));
}
