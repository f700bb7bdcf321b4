//! PDF boundary of the booklet pipeline
//!
//! This module handles all PDF-specific operations:
//! - Rasterizing source pages with pdfium
//! - Encoding spreads as image pages of the output document

mod sink;
#[cfg(feature = "render")]
mod source;

pub use sink::{encode_pdf, pdf_to_bytes};
#[cfg(feature = "render")]
pub use source::{init_pdfium, rasterize_pdf};
