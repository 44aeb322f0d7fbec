use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::intake::description::{append_suggestion, counter_level, CounterLevel};
use crate::intake::gate::{
    can_submit, is_accepted_type, validate_submission, UNSUPPORTED_TYPE_MSG,
};
use crate::intake::preview::FilePreview;
use crate::notify::Advisory;
use crate::progress::pipeline::run_analysis_flow;
use crate::state::AppState;
use crate::upstream::ResumeUpload;

#[derive(Serialize)]
pub struct AnalyzeAccepted {
    pub job_id: Uuid,
    pub preview: FilePreview,
    pub advisory: Advisory,
}

/// POST /api/v1/analyze
///
/// The authoritative submission path: re-runs both gate checks regardless of
/// what the page's enable/disable affordance claimed, then starts the
/// progress flow. Responds 202 immediately; the real upstream submission
/// fires later inside the pipeline.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<AnalyzeAccepted>), AppError> {
    let mut file: Option<(String, String, bytes::Bytes)> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let content = field.bytes().await?;

                // An empty filename is a browser's "no file chosen" part.
                if file_name.is_empty() {
                    continue;
                }
                if !is_accepted_type(&content_type) {
                    // Never populates the selection.
                    return Err(AppError::UnsupportedFileType(
                        UNSUPPORTED_TYPE_MSG.to_string(),
                    ));
                }
                file = Some((file_name, content_type, content));
            }
            "job_description" => {
                job_description = field.text().await?;
            }
            _ => {}
        }
    }

    let validation = validate_submission(file.is_some(), &job_description);
    if let Some(message) = validation.combined_message() {
        return Err(AppError::Validation(message));
    }

    // Validation guarantees the file is present past this point.
    let (file_name, content_type, content) = file.ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!("validated submission lost its file"))
    })?;
    let preview = FilePreview::new(&file_name, content.len() as u64);

    let upload = ResumeUpload {
        file_name,
        content_type,
        content,
        job_description,
    };

    let (job_id, view, cancel_rx) = state.jobs.create();
    tokio::spawn(run_analysis_flow(
        Arc::new(view),
        upload,
        state.submitter.clone(),
        cancel_rx,
    ));

    tracing::info!(%job_id, file = %preview.name, "Analysis flow started");

    Ok((
        StatusCode::ACCEPTED,
        Json(AnalyzeAccepted {
            job_id,
            preview,
            advisory: Advisory::success("Resume uploaded successfully!"),
        }),
    ))
}

#[derive(Deserialize)]
pub struct IntakeCheckRequest {
    pub has_file: bool,
    #[serde(default)]
    pub description: String,
    /// Optional keyword chip the user clicked; appended unless already present.
    #[serde(default)]
    pub suggestion: Option<String>,
}

#[derive(Serialize)]
pub struct IntakeCheckResponse {
    /// Enabled state for the submit control (affordance only; the analyze
    /// handler re-validates).
    pub can_submit: bool,
    pub char_count: usize,
    pub counter_level: CounterLevel,
    pub description: String,
}

/// POST /api/v1/intake/check
///
/// Recomputes the derived readiness state the page reflects on every input
/// change: submit-control enablement, character counter level, and the
/// description text after an optional suggestion insertion.
pub async fn handle_intake_check(
    Json(req): Json<IntakeCheckRequest>,
) -> Json<IntakeCheckResponse> {
    let description = match req.suggestion.as_deref() {
        Some(keyword) => {
            append_suggestion(&req.description, keyword).unwrap_or(req.description)
        }
        None => req.description,
    };

    Json(IntakeCheckResponse {
        can_submit: can_submit(req.has_file, &description),
        char_count: description.chars().count(),
        counter_level: counter_level(description.chars().count()),
        description,
    })
}
