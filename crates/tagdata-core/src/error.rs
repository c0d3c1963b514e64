//! Error types for the tagdata-core library.

use thiserror::Error;

/// Main error type for the tagdata library.
#[derive(Error, Debug)]
pub enum TagdataError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Template or manifest loading error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// CSV reading/writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),

    /// The crate was built without PDF support.
    #[error("pdf text extraction not installed (build with the `pdf` feature)")]
    NotInstalled,
}

/// Errors related to loading templates and manifests.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Failed to parse the manifest JSON.
    #[error("failed to parse manifest: {0}")]
    Manifest(String),

    /// Failed to parse the SVG template.
    #[error("failed to parse SVG: {0}")]
    Svg(String),
}

/// Result type for the tagdata library.
pub type Result<T> = std::result::Result<T, TagdataError>;
