//! Page extraction from a source PDF

use crate::constants::POINTS_PER_INCH;
use crate::page::Page;
use crate::types::*;
use image::{DynamicImage, RgbaImage};
use log::{debug, info};
use pdfium_render::prelude::*;
use std::path::PathBuf;

/// Environment variable naming a directory that holds the pdfium library
const PDFIUM_DIR_VAR: &str = "PDFIUM_LIB_DIR";

/// Directory of the pdfium copy shipped next to the binary's working directory
const VENDORED_PDFIUM_DIR: &str = "vendor/pdfium/lib";

/// Bind to pdfium.
///
/// Directories are tried in order: `$PDFIUM_LIB_DIR`, then
/// `./vendor/pdfium/lib`, then the system library search path.
pub fn init_pdfium() -> Result<Pdfium> {
    let candidates = std::env::var_os(PDFIUM_DIR_VAR)
        .map(PathBuf::from)
        .into_iter()
        .chain(std::env::current_dir().ok().map(|dir| dir.join(VENDORED_PDFIUM_DIR)))
        .filter(|dir| dir.is_dir());

    for dir in candidates {
        let library = Pdfium::pdfium_platform_library_name_at_path(&dir);
        match Pdfium::bind_to_library(&library) {
            Ok(bindings) => {
                debug!("using pdfium from {}", dir.display());
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => debug!("no usable pdfium in {}: {}", dir.display(), e),
        }
    }

    debug!("using system pdfium");
    Ok(Pdfium::new(Pdfium::bind_to_system_library()?))
}

/// Render every page of a PDF into an RGB page.
///
/// Pages are numbered from 1 in document order; the number is the page id.
pub fn rasterize_pdf(bytes: Vec<u8>, dpi: u32) -> Result<Vec<Page>> {
    info!("extract pages at {} dpi", dpi);
    let pdfium = init_pdfium()?;
    let document = pdfium.load_pdf_from_byte_vec(bytes, None)?;

    let config = PdfRenderConfig::new().scale_page_by_factor(dpi as f32 / POINTS_PER_INCH);

    let mut pages = Vec::new();
    for (index, page) in document.pages().iter().enumerate() {
        let bitmap = page.render_with_config(&config)?;
        let width = bitmap.width() as u32;
        let height = bitmap.height() as u32;
        debug!("page {}: {}x{} px", index + 1, width, height);

        let rgba = RgbaImage::from_raw(width, height, bitmap.as_rgba_bytes().to_vec())
            .ok_or_else(|| {
                BookletError::InvalidGeometry(format!(
                    "page {} bitmap does not match its size {}x{}",
                    index + 1,
                    width,
                    height
                ))
            })?;
        let image = DynamicImage::ImageRgba8(rgba).to_rgb8();
        pages.push(Page::new((index + 1).to_string(), image)?);
    }

    info!("extracted {} pages", pages.len());
    Ok(pages)
}
