//! Upload pipeline: PDF bytes -> structured mapping -> portfolio HTML.
//!
//! This is the one place where structuring errors are collapsed: the error is
//! logged with its kind and rendering continues from an empty mapping, so the
//! caller always gets a document back.

use bytes::Bytes;
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::render::render_portfolio;
use crate::structuring::{ResumeStructurer, StructuringError};

/// Structures the PDF and returns the plain mapping, or an empty mapping on
/// any failure.
pub async fn structure_or_empty(pdf: Bytes, structurer: &ResumeStructurer) -> Value {
    match try_structure(pdf, structurer).await {
        Ok(mapping) => mapping,
        Err(e) => {
            error!(kind = e.kind(), "Resume structuring failed: {e}");
            Value::Object(Map::new())
        }
    }
}

async fn try_structure(
    pdf: Bytes,
    structurer: &ResumeStructurer,
) -> Result<Value, StructuringError> {
    let resume = structurer.structure_pdf(pdf).await?;
    info!(
        experience = resume.experience.len(),
        projects = resume.projects.len(),
        skills = resume.skills.len(),
        "Resume structured"
    );
    Ok(resume.into_mapping()?)
}

/// Full pipeline for one upload.
pub async fn build_portfolio(pdf: Bytes, structurer: &ResumeStructurer) -> String {
    let mapping = structure_or_empty(pdf, structurer).await;
    render_portfolio(&mapping)
}
