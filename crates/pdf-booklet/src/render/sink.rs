//! Output document encoding
//!
//! Each page becomes one PDF page showing a single JPEG image XObject
//! that covers the whole MediaBox.

use crate::constants::px_to_pt;
use crate::page::Page;
use crate::types::*;
use image::codecs::jpeg::JpegEncoder;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

/// Name of the image XObject in each page's resources
const IMAGE_NAME: &str = "Im0";

/// Build a PDF with one page per image.
///
/// Page sizes follow the pixel size at `dpi`.
pub fn encode_pdf(pages: &[Page], dpi: u32, quality: u8) -> Result<Document> {
    if pages.is_empty() {
        return Err(BookletError::InvalidGeometry(
            "no pages to write".to_string(),
        ));
    }

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(pages.len());

    for page in pages {
        let page_id = add_image_page(&mut output, page, dpi, quality, pages_tree_id)?;
        page_refs.push(Object::Reference(page_id));
    }

    write_page_tree(&mut output, pages_tree_id, page_refs);
    Ok(output)
}

/// Serialize a document
pub fn pdf_to_bytes(mut doc: Document) -> Result<Vec<u8>> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}

fn add_image_page(
    output: &mut Document,
    page: &Page,
    dpi: u32,
    quality: u8,
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let (width, height) = page.size();
    let image_id = output.add_object(image_stream(page, quality)?);

    let width_pt = px_to_pt(width, dpi);
    let height_pt = px_to_pt(height, dpi);

    let content = format!(
        "q {} 0 0 {} 0 0 cm /{} Do Q",
        width_pt, height_pt, IMAGE_NAME
    );
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut xobjects = Dictionary::new();
    xobjects.set(IMAGE_NAME, Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width_pt),
            Object::Real(height_pt),
        ]),
    );
    page_dict.set("Resources", Object::Dictionary(resources));
    page_dict.set("Contents", Object::Reference(content_id));

    Ok(output.add_object(page_dict))
}

/// Encode a page as a JPEG image stream
fn image_stream(page: &Page, quality: u8) -> Result<Stream> {
    let (width, height) = page.size();

    let mut jpeg_bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut jpeg_bytes, quality);
    encoder.encode_image(page.image())?;

    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

    // Already compressed; lopdf must not deflate it again
    Ok(Stream::new(dict, jpeg_bytes).with_compression(false))
}

/// Write the page tree node and point the trailer at a new catalog
fn write_page_tree(output: &mut Document, pages_tree_id: ObjectId, kids: Vec<Object>) {
    let count = kids.len() as i64;
    output.set_object(
        pages_tree_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        },
    );

    let catalog_id = output.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_tree_id,
    });
    output.trailer.set("Root", catalog_id);
}
