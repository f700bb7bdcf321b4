use crate::constants::{DEFAULT_DPI, DEFAULT_JPEG_QUALITY};
use crate::pipeline::effective_first_page;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet conversion configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Page detection
    pub split_mode: SplitMode,
    pub title_page: TitlePage,

    // Page numbering
    pub first_page: FirstPage,
    /// 1-based source page numbers to drop
    pub skip: Vec<usize>,

    // Blank placement
    /// Keep padding blanks after the last page instead of before it
    pub blank_after_last: bool,

    // Rasterization and encoding
    pub dpi: u32,
    pub jpeg_quality: u8,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            split_mode: SplitMode::Auto,
            title_page: TitlePage::Auto,
            first_page: FirstPage::Auto,
            skip: Vec::new(),
            blank_after_last: false,
            dpi: DEFAULT_DPI,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.skip.contains(&0) {
            return Err(BookletError::Config(
                "Skipped page numbers start at 1".to_string(),
            ));
        }

        if let FirstPage::Page(number) = self.first_page {
            effective_first_page(number, &self.skip)?;
        }

        if self.dpi == 0 {
            return Err(BookletError::Config("DPI must be positive".to_string()));
        }

        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(BookletError::Config(format!(
                "JPEG quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }

        Ok(())
    }
}
