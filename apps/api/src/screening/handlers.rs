use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::screening::{RankedResult, SkippedFile};
use crate::screening::batch::{run_screening, UploadedResume};
use crate::screening::export::{results_to_csv, EXPORT_FILENAME};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ScreeningResponse {
    pub processed: usize,
    pub skipped: Vec<SkippedFile>,
    pub results: Vec<RankedResult>,
}

/// POST /api/v1/screenings
///
/// Multipart form: one `job_description` text field and one or more
/// `resumes` file fields. Runs the full batch and replaces the session
/// result collection with this run's ranking.
pub async fn handle_run_screening(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningResponse>, AppError> {
    let mut job_description: Option<String> = None;
    let mut uploads: Vec<UploadedResume> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("job_description") => {
                job_description = Some(field.text().await?);
            }
            Some("resumes") => {
                let filename = field
                    .file_name()
                    .unwrap_or("resume.pdf")
                    .to_string();
                let bytes = field.bytes().await?;
                uploads.push(UploadedResume { filename, bytes });
            }
            _ => {} // unknown fields are ignored
        }
    }

    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_description field is required".to_string()))?;
    if uploads.is_empty() {
        return Err(AppError::Validation(
            "at least one resumes file is required".to_string(),
        ));
    }

    info!(files = uploads.len(), "starting screening run");
    let outcome = run_screening(
        &state.scorer,
        state.extractor.as_ref(),
        &job_description,
        uploads,
    )
    .await;

    *state.results.write().await = outcome.ranked.clone();

    Ok(Json(ScreeningResponse {
        processed: outcome.ranked.len(),
        skipped: outcome.skipped,
        results: outcome.ranked,
    }))
}

/// GET /api/v1/screenings
/// Returns the current ranked collection (highest match first).
pub async fn handle_get_results(
    State(state): State<AppState>,
) -> Json<Vec<RankedResult>> {
    Json(state.results.read().await.clone())
}

/// GET /api/v1/screenings/export
/// Returns the current ranked collection as a CSV attachment.
pub async fn handle_export_csv(State(state): State<AppState>) -> Result<Response, AppError> {
    let results = state.results.read().await;
    let csv_bytes = results_to_csv(&results)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        csv_bytes,
    )
        .into_response())
}
