use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[cfg(feature = "render")]
    #[error("PDF rendering error: {0}")]
    Render(#[from] pdfium_render::prelude::PdfiumError),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Double pages could not be aligned after {rounds} rounds")]
    Alignment { rounds: usize },
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// How source pages are split into physical pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SplitMode {
    /// Detect double pages from their aspect ratios
    #[default]
    Auto,
    /// Every source page is a single page
    Single,
    /// Every source page is a double page
    Double,
}

/// Which source page is the title page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TitlePage {
    /// Page 1 when it is single, page 2 when it is double
    #[default]
    Auto,
    /// The first page
    First,
    /// The second page; the first one is moved to the back
    Second,
}

/// Source page number of the first numbered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FirstPage {
    /// The page right after the title page
    #[default]
    Auto,
    /// 1-based page number in the source document
    Page(usize),
}

impl std::str::FromStr for FirstPage {
    type Err = BookletError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(FirstPage::Auto);
        }
        s.trim()
            .parse::<usize>()
            .map(FirstPage::Page)
            .map_err(|_| {
                BookletError::Config(format!(
                    "First page must be 'auto' or a page number, got '{}'",
                    s
                ))
            })
    }
}

/// Statistics about a produced booklet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookletStatistics {
    /// Pages read from the source document
    pub source_pages: usize,
    /// Source pages removed by the skip list
    pub skipped_pages: usize,
    /// Source pages split into two physical pages
    pub double_pages: usize,
    /// Physical pages after splitting
    pub content_pages: usize,
    /// Blank pages inserted while numbering, padding and aligning
    pub blank_pages_added: usize,
    /// Merged spreads in the output document
    pub output_spreads: usize,
    /// Physical sheets needed to print the booklet double-sided
    pub output_sheets: usize,
}
