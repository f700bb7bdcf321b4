//! Page values flowing through the booklet pipeline
//!
//! A [`Page`] is an immutable raster plus lineage. Every transformation
//! returns new pages; the pixel buffer is reference counted so pages that
//! keep their image (rotation, reordering, alignment) never copy pixels.

use crate::constants::{BLANK_ID, LEFT_SUFFIX, MERGE_SEPARATOR, RIGHT_SUFFIX, WHITE};
use crate::types::*;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use std::fmt;
use std::sync::Arc;

/// Which half of a split double page a page is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagePosition {
    /// Not the result of a split
    #[default]
    None,
    Left,
    Right,
}

/// One logical page: a raster image and where it came from
#[derive(Debug, Clone)]
pub struct Page {
    id: String,
    image: Arc<RgbImage>,
    parent: Option<String>,
    position: PagePosition,
    is_blank: bool,
}

impl Page {
    /// Create an original page. Fails on an empty image.
    pub fn new(id: impl Into<String>, image: RgbImage) -> Result<Self> {
        let id = id.into();
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(BookletError::InvalidGeometry(format!(
                "page {} has zero size {}x{}",
                id, width, height
            )));
        }
        Ok(Self {
            id,
            image: Arc::new(image),
            parent: None,
            position: PagePosition::None,
            is_blank: false,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Id of the page this one was split from
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn position(&self) -> PagePosition {
        self.position
    }

    pub fn is_blank(&self) -> bool {
        self.is_blank
    }

    /// Image size as (width, height) in pixels
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Width to height ratio
    pub fn ratio(&self) -> f64 {
        let (width, height) = self.size();
        width as f64 / height as f64
    }

    /// Cut a double page into its left and right halves.
    ///
    /// The center column is dropped so the scan gutter does not end up
    /// on either page.
    pub fn split(&self) -> Result<(Page, Page)> {
        let (width, height) = self.size();
        let mid = width / 2;
        let right_width = width - mid - 1;
        if mid == 0 || right_width == 0 {
            return Err(BookletError::InvalidGeometry(format!(
                "page {} is too narrow to split ({} px)",
                self.id, width
            )));
        }

        let left = imageops::crop_imm(self.image.as_ref(), 0, 0, mid, height).to_image();
        let right =
            imageops::crop_imm(self.image.as_ref(), mid + 1, 0, right_width, height).to_image();

        Ok((
            self.half(LEFT_SUFFIX, left, PagePosition::Left),
            self.half(RIGHT_SUFFIX, right, PagePosition::Right),
        ))
    }

    fn half(&self, suffix: &str, image: RgbImage, position: PagePosition) -> Page {
        Page {
            id: format!("{}{}", self.id, suffix),
            image: Arc::new(image),
            parent: Some(self.id.clone()),
            position,
            is_blank: false,
        }
    }

    /// A white page with the same size as this one
    pub fn blank(&self) -> Page {
        let (width, height) = self.size();
        Page {
            id: BLANK_ID.to_string(),
            image: Arc::new(RgbImage::from_pixel(width, height, Rgb(WHITE))),
            parent: None,
            position: PagePosition::None,
            is_blank: true,
        }
    }

    /// Scale to the given height, keeping the aspect ratio.
    ///
    /// Lineage and the blank flag carry over to the resized page.
    pub fn resize_to_height(&self, height: u32) -> Result<Page> {
        if height == 0 {
            return Err(BookletError::InvalidGeometry(format!(
                "cannot resize page {} to zero height",
                self.id
            )));
        }
        if height == self.height() {
            return Ok(self.clone());
        }

        let width = (u64::from(self.width()) * u64::from(height) / u64::from(self.height())) as u32;
        let width = width.max(1);
        let image = if self.is_blank {
            RgbImage::from_pixel(width, height, Rgb(WHITE))
        } else {
            imageops::resize(self.image.as_ref(), width, height, FilterType::CatmullRom)
        };

        Ok(Page {
            image: Arc::new(image),
            ..self.clone()
        })
    }

    /// Place two pages side by side on a white canvas.
    ///
    /// The canvas is as wide as both pages together and as tall as the
    /// taller one.
    pub fn merge(left: &Page, right: &Page) -> Page {
        let (left_width, left_height) = left.size();
        let (right_width, right_height) = right.size();
        let mut canvas = RgbImage::from_pixel(
            left_width + right_width,
            left_height.max(right_height),
            Rgb(WHITE),
        );
        imageops::replace(&mut canvas, left.image.as_ref(), 0, 0);
        imageops::replace(&mut canvas, right.image.as_ref(), left_width as i64, 0);

        Page {
            id: format!("{}{}{}", left.id, MERGE_SEPARATOR, right.id),
            image: Arc::new(canvas),
            parent: None,
            position: PagePosition::None,
            is_blank: false,
        }
    }

    /// True when both pages hold the same pixel buffer
    #[cfg(test)]
    pub(crate) fn shares_image(&self, other: &Page) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
