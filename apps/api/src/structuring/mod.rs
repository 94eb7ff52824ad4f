//! Resume structuring: turns extracted resume text into the declared resume shape.
//!
//! One provider call per attempt: prompt = schema format instructions + text,
//! response = JSON coerced into `Resume`. Every failure is returned as a typed
//! `StructuringError`; collapsing to an empty result is the pipeline's job.

pub mod prompts;

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::extraction::{extract_text, ExtractError};
use crate::llm_client::{strip_json_fences, LlmClient, LlmError, LlmProvider};
use crate::models::Resume;
use crate::schema::RESUME_SCHEMA;
use crate::structuring::prompts::{build_resume_prompt, RESUME_PARSE_SYSTEM};

#[derive(Debug, Error)]
pub enum StructuringError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("document format error: {0}")]
    DocumentFormat(#[from] ExtractError),

    #[error("provider error: {0}")]
    Provider(#[from] LlmError),

    #[error("schema coercion error: {0}")]
    SchemaCoercion(#[from] serde_json::Error),
}

impl StructuringError {
    /// Stable short name used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            StructuringError::Configuration(_) => "configuration",
            StructuringError::DocumentFormat(_) => "document_format",
            StructuringError::Provider(_) => "provider",
            StructuringError::SchemaCoercion(_) => "schema_coercion",
        }
    }
}

/// Structuring service. Holds the provider it was constructed with; without a
/// credential there is no provider and every attempt fails with
/// `StructuringError::Configuration`.
pub struct ResumeStructurer {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl ResumeStructurer {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    /// Builds the Gemini-backed structurer from configuration. A blank or
    /// missing API key yields an unconfigured structurer, not a startup error.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let api_key = config
            .gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty());

        match api_key {
            Some(key) => {
                let client = LlmClient::new(
                    key.to_string(),
                    &config.gemini_base_url,
                    Duration::from_secs(config.llm_timeout_secs),
                )?;
                info!("LLM client initialized (model: {})", crate::llm_client::MODEL);
                Ok(Self::new(Arc::new(client)))
            }
            None => {
                warn!("GEMINI_API_KEY is not set; uploads will render an empty portfolio");
                Ok(Self::unconfigured())
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    fn provider(&self) -> Result<&dyn LlmProvider, StructuringError> {
        self.provider.as_deref().ok_or_else(|| {
            StructuringError::Configuration("GEMINI_API_KEY is not configured".to_string())
        })
    }

    /// Structures already-extracted resume text.
    pub async fn structure_text(&self, text: &str) -> Result<Resume, StructuringError> {
        let provider = self.provider()?;

        let prompt = build_resume_prompt(&RESUME_SCHEMA.format_instructions(), text);
        let raw = provider.complete(&prompt, RESUME_PARSE_SYSTEM).await?;
        let resume: Resume = serde_json::from_str(strip_json_fences(&raw))?;

        debug!(?resume, "Structured resume data");
        Ok(resume)
    }

    /// Full structuring step: credential check, PDF text extraction, LLM call.
    pub async fn structure_pdf(&self, pdf: Bytes) -> Result<Resume, StructuringError> {
        self.provider()?;

        let text = extract_text(pdf).await?;
        debug!(chars = text.len(), "Extracted resume text");

        self.structure_text(&text).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Provider stub returning a canned response and recording prompts.
    pub(crate) struct StubProvider {
        response: Result<String, u16>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl StubProvider {
        pub(crate) fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                response: Err(status),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmProvider for StubProvider {
        async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "stubbed failure".to_string(),
                }),
            }
        }
    }

    fn test_config(api_key: Option<&str>) -> Config {
        Config {
            gemini_api_key: api_key.map(String::from),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            llm_timeout_secs: 1,
            max_upload_bytes: 1024,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_text_is_configuration_error() {
        let structurer = ResumeStructurer::unconfigured();
        let err = structurer.structure_text("Ada").await.unwrap_err();
        assert!(matches!(err, StructuringError::Configuration(_)));
        assert_eq!(err.kind(), "configuration");
    }

    #[tokio::test]
    async fn test_unconfigured_pdf_fails_before_extraction() {
        let structurer = ResumeStructurer::unconfigured();
        let err = structurer
            .structure_pdf(Bytes::from_static(b"not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, StructuringError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_structure_text_coerces_response() {
        let stub = StubProvider::replying(
            r#"{"name": "Ada Lovelace", "experience": [], "education": [], "projects": [],
                "certifications": [], "skills": ["Python", "Math"]}"#,
        );
        let structurer = ResumeStructurer::new(stub.clone());

        let resume = structurer.structure_text("Ada Lovelace\nPython").await.unwrap();
        assert_eq!(resume.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(resume.skills, vec!["Python", "Math"]);

        let prompts = stub.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("JSON schema"));
        assert!(prompts[0].contains("A list of work experiences."));
        assert!(prompts[0].ends_with("Ada Lovelace\nPython"));
    }

    #[tokio::test]
    async fn test_structure_text_accepts_fenced_json() {
        let stub = StubProvider::replying("```json\n{\"summary\": \"Engineer\"}\n```");
        let structurer = ResumeStructurer::new(stub);
        let resume = structurer.structure_text("").await.unwrap();
        assert_eq!(resume.summary.as_deref(), Some("Engineer"));
    }

    #[tokio::test]
    async fn test_unparseable_output_is_schema_coercion_error() {
        let stub = StubProvider::replying("Sorry, I cannot help with that.");
        let err = ResumeStructurer::new(stub)
            .structure_text("Ada")
            .await
            .unwrap_err();
        assert!(matches!(err, StructuringError::SchemaCoercion(_)));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_schema_coercion_error() {
        let stub = StubProvider::replying(r#"{"experience": [{"company": "Acme"}]}"#);
        let err = ResumeStructurer::new(stub)
            .structure_text("Ada")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "schema_coercion");
    }

    #[tokio::test]
    async fn test_provider_failure_is_provider_error() {
        let err = ResumeStructurer::new(StubProvider::failing(500))
            .structure_text("Ada")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StructuringError::Provider(LlmError::Api { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_pdf_is_document_format_error() {
        let stub = StubProvider::replying("{}");
        let structurer = ResumeStructurer::new(stub.clone());
        let err = structurer
            .structure_pdf(Bytes::from_static(b"not a pdf at all"))
            .await
            .unwrap_err();
        assert!(matches!(err, StructuringError::DocumentFormat(_)));
        assert!(stub.prompts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_from_config_blank_key_is_unconfigured() {
        assert!(!ResumeStructurer::from_config(&test_config(None))
            .unwrap()
            .is_configured());
        assert!(!ResumeStructurer::from_config(&test_config(Some("   ")))
            .unwrap()
            .is_configured());
    }

    #[test]
    fn test_from_config_with_key_is_configured() {
        let structurer = ResumeStructurer::from_config(&test_config(Some("abc"))).unwrap();
        assert!(structurer.is_configured());
    }
}
