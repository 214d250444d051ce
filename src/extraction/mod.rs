//! Page-level text extraction.
//!
//! PDFs go through `pdf-extract`; any other file is read as UTF-8 text with
//! form feeds separating pages.

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Page separator in plain-text documents.
pub const PAGE_BREAK: char = '\u{0C}';

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("PDF extraction failed for {path}: {message}")]
    Pdf { path: PathBuf, message: String },
    #[error("PDF extractor panicked on {0}")]
    Panicked(PathBuf),
}

/// Yields ordered per-page text for a document. `None` marks an unreadable page.
pub trait PageSource {
    fn pages(&self, path: &Path) -> Result<Vec<Option<String>>, ExtractionError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FilePageSource;

impl PageSource for FilePageSource {
    fn pages(&self, path: &Path) -> Result<Vec<Option<String>>, ExtractionError> {
        if is_pdf(path) {
            extract_pdf_pages(path)
        } else {
            extract_text_pages(path)
        }
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn extract_pdf_pages(path: &Path) -> Result<Vec<Option<String>>, ExtractionError> {
    // pdf-extract panics on some malformed inputs
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_by_pages(path)))
        .map_err(|_| ExtractionError::Panicked(path.to_path_buf()))?;

    let pages = outcome.map_err(|e| ExtractionError::Pdf {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(pages.into_iter().map(non_empty).collect())
}

fn extract_text_pages(path: &Path) -> Result<Vec<Option<String>>, ExtractionError> {
    let content = fs::read_to_string(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .split(PAGE_BREAK)
        .map(|page| non_empty(page.to_string()))
        .collect())
}

fn non_empty(page: String) -> Option<String> {
    if page.trim().is_empty() {
        None
    } else {
        Some(page)
    }
}
