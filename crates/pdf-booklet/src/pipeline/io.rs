//! Document I/O around the booklet pipeline

use crate::page::Page;
use crate::render::{encode_pdf, pdf_to_bytes};
use crate::types::*;
use log::info;
use std::path::Path;

/// Load a PDF and rasterize its pages at `dpi`
#[cfg(feature = "render")]
pub async fn load_pages(path: impl AsRef<Path>, dpi: u32) -> Result<Vec<Page>> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    tokio::task::spawn_blocking(move || crate::render::rasterize_pdf(bytes, dpi)).await?
}

/// Save pages as a PDF, one page per image
pub async fn save_pages(
    pages: Vec<Page>,
    path: impl AsRef<Path>,
    dpi: u32,
    jpeg_quality: u8,
) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let doc = encode_pdf(&pages, dpi, jpeg_quality)?;
        pdf_to_bytes(doc)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Write every page as a numbered PNG (`0000.png`, `0001.png`, ...)
pub async fn dump_pages(pages: Vec<Page>, dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref().to_owned();
    tokio::fs::create_dir_all(&dir).await?;
    tokio::task::spawn_blocking(move || {
        for (index, page) in pages.iter().enumerate() {
            page.image().save(dir.join(format!("{:04}.png", index)))?;
        }
        Ok::<_, BookletError>(())
    })
    .await?
}
