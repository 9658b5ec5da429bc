//! Document service - finding decklist PDFs and reading their first page

use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// What the pipeline needs to know about one document
pub trait DocumentSource {
    fn page_count(&self) -> usize;

    /// Extracted text of the first page; `None` if there is none
    fn first_page_text(&self) -> Option<String>;
}

/// A PDF loaded with `lopdf`
pub struct PdfDocument {
    doc: lopdf::Document,
}

impl PdfDocument {
    pub fn open(path: &Path) -> std::result::Result<Self, lopdf::Error> {
        let doc = lopdf::Document::load(path)?;
        Ok(Self { doc })
    }
}

impl DocumentSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    fn first_page_text(&self) -> Option<String> {
        let first = *self.doc.get_pages().keys().next()?;
        match self.doc.extract_text(&[first]) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!(error = %e, "no text on first page");
                None
            }
        }
    }
}

/// All `.pdf` files under `folder`, recursively, in path order
pub fn discover_pdfs(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        anyhow::bail!("Not a folder: {}", folder.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", folder.display()))?;
        let is_pdf = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if entry.file_type().is_file() && is_pdf {
            files.push(entry.into_path());
        }
    }

    debug!(folder = %folder.display(), count = files.len(), "discovered PDFs");
    Ok(files)
}
