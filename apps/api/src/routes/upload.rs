//! Upload endpoint: multipart PDF in, portfolio HTML out.

use axum::{
    extract::{Multipart, State},
    response::Html,
};
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::pipeline::build_portfolio;
use crate::state::AppState;

/// Multipart field carrying the resume PDF.
pub const FILE_FIELD: &str = "file";

/// POST /upload-pdf/
///
/// Always answers with an HTML document once a file was received; structuring
/// failures produce the placeholder portfolio rather than an error status.
pub async fn handle_upload_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let request_id = Uuid::new_v4();
    let pdf = read_file_field(&mut multipart).await?;
    info!(%request_id, bytes = pdf.len(), "Received resume upload");

    let html = build_portfolio(pdf, &state.structurer).await;

    info!(%request_id, html_bytes = html.len(), "Portfolio generated");
    Ok(Html(html))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            return Ok(field.bytes().await?);
        }
    }
    Err(AppError::UnprocessableEntity(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}
