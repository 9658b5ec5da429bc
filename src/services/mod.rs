//! Services layer - document reading, batch assembly and upload, shared by the CLI commands

pub mod batch_service;
pub mod document_service;
pub mod upload_service;

pub use batch_service::{read_document, read_pdfs, Batch, DocumentOutcome};
pub use document_service::{discover_pdfs, DocumentSource, PdfDocument};
pub use upload_service::{upload, UploadOutcome};
