//! PDF text extraction.
//!
//! `pdf-extract` is CPU-bound and can panic on hostile input, so extraction runs
//! on the blocking pool and a panicked task is reported as a document error.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("malformed PDF: {0}")]
    Malformed(String),

    #[error("PDF extraction aborted: {0}")]
    Panicked(String),
}

/// Extracts the text of every page in document order.
///
/// Pages that yield no text are skipped; every kept page is followed by a
/// newline. A document with no extractable text yields an empty string.
pub async fn extract_text(pdf: Bytes) -> Result<String, ExtractError> {
    let pages = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&pdf)
    })
    .await
    .map_err(|e| ExtractError::Panicked(e.to_string()))?
    .map_err(|e| ExtractError::Malformed(e.to_string()))?;

    debug!(pages = pages.len(), "PDF pages extracted");
    Ok(join_pages(pages))
}

/// Concatenates page texts, skipping pages with nothing but whitespace.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.trim().is_empty() {
            continue;
        }
        text.push_str(page);
        text.push('\n');
    }
    text
}
