//! PDF spec-sheet processing module.
//!
//! Only text extraction is needed for tag data; page layout, images, and
//! scanned documents are out of scope.

#[cfg(feature = "pdf")]
mod extractor;

#[cfg(feature = "pdf")]
pub use extractor::PdfExtractor;

use std::path::Path;

use tracing::warn;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;
}

/// Collect per-page text from a loaded document, one string per page joined
/// by newlines.
///
/// A page whose extraction fails degrades to an empty string rather than
/// aborting the document.
pub fn collect_pages_text(processor: &impl PdfProcessor) -> String {
    let page_count = processor.page_count();

    let mut pages = Vec::with_capacity(page_count as usize);
    for page in 1..=page_count {
        match processor.extract_page_text(page) {
            Ok(text) => pages.push(text),
            Err(e) => {
                warn!("failed to extract text from page {}: {}", page, e);
                pages.push(String::new());
            }
        }
    }

    pages.join("\n")
}

/// Read the full text of a spec-sheet PDF.
///
/// Loading failures (unreadable file, encrypted or empty PDF) are errors;
/// individual page failures degrade per [`collect_pages_text`].
#[cfg(feature = "pdf")]
pub fn read_document_text(path: &Path) -> Result<String> {
    use tracing::debug;

    let data = std::fs::read(path).map_err(|e| PdfError::Parse(e.to_string()))?;

    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;

    debug!("loaded {} with {} pages", path.display(), extractor.page_count());

    Ok(collect_pages_text(&extractor))
}

/// Without the `pdf` feature there is no text-extraction capability; fail
/// before any extraction is attempted.
#[cfg(not(feature = "pdf"))]
pub fn read_document_text(_path: &Path) -> Result<String> {
    Err(PdfError::NotInstalled)
}
