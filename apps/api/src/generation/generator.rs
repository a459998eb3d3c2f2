//! Completion pipeline shared by the writing endpoints.
//!
//! Flow: prompt (built by the caller) → model call → sanitize → non-empty check.

use std::fmt;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::sanitizer::sanitize;
use crate::llm_client::prompts::WRITER_SYSTEM;
use crate::llm_client::{LlmError, TextGenerator};

/// Which document a request asks for. Used for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    CoverLetter,
    JobDescription,
    ColdEmail,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::CoverLetter => "cover_letter",
            DocumentKind::JobDescription => "job_description",
            DocumentKind::ColdEmail => "cold_email",
        };
        f.write_str(name)
    }
}

/// Sends `prompt` to the model and returns the sanitized, non-empty text.
pub async fn generate(
    generator: &dyn TextGenerator,
    kind: DocumentKind,
    prompt: &str,
) -> Result<String, AppError> {
    info!("Generating {kind} (prompt: {} chars)", prompt.chars().count());

    let raw = generator.complete(WRITER_SYSTEM, prompt).await?;
    let text = sanitize(&raw);

    if text.is_empty() {
        warn!(
            "Model output for {kind} was empty after sanitizing ({} raw chars)",
            raw.chars().count()
        );
        return Err(AppError::Llm(LlmError::EmptyContent));
    }

    info!("Generated {kind}: {} chars", text.chars().count());
    Ok(text)
}
