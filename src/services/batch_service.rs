//! Batch service - turning a folder's worth of documents into decklists

use super::document_service::{DocumentSource, PdfDocument};
use crate::models::{Decklist, RejectReason, Rejection};
use crate::parser::parse_decklist;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Result of reading a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    Parsed(Decklist),
    Rejected(Rejection),
}

/// Read one document through the extraction pipeline
pub fn read_document(document: &str, source: &impl DocumentSource) -> DocumentOutcome {
    let page_count = source.page_count();
    let first_page = if page_count > 0 {
        source.first_page_text()
    } else {
        None
    };

    match parse_decklist(page_count, first_page.as_deref()) {
        Ok(decklist) => {
            debug!(document, player = %decklist.player, "parsed decklist");
            DocumentOutcome::Parsed(decklist)
        }
        Err(reason) => {
            debug!(document, %reason, "rejected document");
            DocumentOutcome::Rejected(Rejection::new(document, reason))
        }
    }
}

/// Decklists and rejections accumulated over one run.
///
/// Every document read ends up in exactly one of the two lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Batch {
    pub decklists: Vec<Decklist>,
    pub rejected: Vec<Rejection>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document's outcome and hand the batch back
    pub fn record(mut self, outcome: DocumentOutcome) -> Self {
        match outcome {
            DocumentOutcome::Parsed(decklist) => self.decklists.push(decklist),
            DocumentOutcome::Rejected(rejection) => self.rejected.push(rejection),
        }
        self
    }

    /// Read `source` and record the outcome
    pub fn ingest(self, document: &str, source: &impl DocumentSource) -> Self {
        self.record(read_document(document, source))
    }

    /// Open the PDF at `path` and record the outcome; an unreadable file is a rejection
    pub fn ingest_pdf(self, path: &Path) -> Self {
        let document = path.display().to_string();
        match PdfDocument::open(path) {
            Ok(pdf) => self.ingest(&document, &pdf),
            Err(e) => self.record(DocumentOutcome::Rejected(Rejection::new(
                document,
                RejectReason::Unreadable(e.to_string()),
            ))),
        }
    }

    /// Number of documents seen so far
    pub fn document_count(&self) -> usize {
        self.decklists.len() + self.rejected.len()
    }
}

/// Read every PDF in `paths`, in order, with `on_document` called after each
pub fn read_pdfs<P, F>(paths: &[P], mut on_document: F) -> Batch
where
    P: AsRef<Path>,
    F: FnMut(&Path),
{
    let batch = paths.iter().fold(Batch::new(), |batch, path| {
        let batch = batch.ingest_pdf(path.as_ref());
        on_document(path.as_ref());
        batch
    });

    info!(
        documents = batch.document_count(),
        parsed = batch.decklists.len(),
        rejected = batch.rejected.len(),
        "finished reading decklists"
    );
    batch
}
