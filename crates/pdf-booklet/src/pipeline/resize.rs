//! Height normalization

use crate::page::Page;
use crate::types::*;
use log::info;

/// Scale every page to the height of the tallest one.
pub fn resize_pages(pages: Vec<Page>) -> Result<Vec<Page>> {
    let max_height = pages
        .iter()
        .map(Page::height)
        .max()
        .ok_or_else(|| BookletError::InvalidGeometry("no pages to resize".to_string()))?;

    info!("resize pages to height {}", max_height);
    pages
        .iter()
        .map(|page| page.resize_to_height(max_height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_resize_to_tallest() {
        let pages = vec![
            Page::new("1", RgbImage::new(70, 100)).unwrap(),
            Page::new("2", RgbImage::new(35, 50)).unwrap(),
            Page::new("3", RgbImage::new(140, 200)).unwrap(),
        ];
        let result = resize_pages(pages).unwrap();
        let sizes: Vec<_> = result.iter().map(Page::size).collect();
        assert_eq!(sizes, vec![(140, 200), (140, 200), (140, 200)]);
    }

    #[test]
    fn test_resize_empty() {
        assert!(matches!(
            resize_pages(Vec::new()),
            Err(BookletError::InvalidGeometry(_))
        ));
    }
}
