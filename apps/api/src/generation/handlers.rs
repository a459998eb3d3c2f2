//! Axum route handlers for the writing API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{generate, DocumentKind};
use crate::generation::models::{
    present, ColdEmailRequest, ColdEmailResponse, CoverLetterRequest, CoverLetterResponse,
    JobDescriptionRequest, JobDescriptionResponse,
};
use crate::generation::prompts::{cold_email_prompt, cover_letter_prompt, job_description_prompt};
use crate::state::AppState;

fn require(value: &Option<String>, field: &str) -> Result<(), AppError> {
    match present(value) {
        Some(_) => Ok(()),
        None => Err(AppError::Validation(format!("{field} is required"))),
    }
}

/// POST /api/ai/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    payload: Result<Json<CoverLetterRequest>, JsonRejection>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let Json(request) = payload?;
    require(&request.job_title, "jobTitle")?;

    let prompt = cover_letter_prompt(&request);
    let letter = generate(state.generator.as_ref(), DocumentKind::CoverLetter, &prompt).await?;

    Ok(Json(CoverLetterResponse { ok: true, letter }))
}

/// POST /api/ai/job-description
pub async fn handle_job_description(
    State(state): State<AppState>,
    payload: Result<Json<JobDescriptionRequest>, JsonRejection>,
) -> Result<Json<JobDescriptionResponse>, AppError> {
    let Json(request) = payload?;
    require(&request.job_title, "jobTitle")?;

    let prompt = job_description_prompt(&request);
    let jd = generate(state.generator.as_ref(), DocumentKind::JobDescription, &prompt).await?;

    Ok(Json(JobDescriptionResponse { ok: true, jd }))
}

/// POST /api/ai/cold-email
pub async fn handle_cold_email(
    State(state): State<AppState>,
    payload: Result<Json<ColdEmailRequest>, JsonRejection>,
) -> Result<Json<ColdEmailResponse>, AppError> {
    let Json(request) = payload?;
    require(&request.company_name, "companyName")?;
    require(&request.goal, "goal")?;

    let prompt = cold_email_prompt(&request);
    let email = generate(state.generator.as_ref(), DocumentKind::ColdEmail, &prompt).await?;

    Ok(Json(ColdEmailResponse { ok: true, email }))
}
