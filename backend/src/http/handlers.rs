//! HTTP handlers for the upload form and JSON API.
//!
//! Each handler corresponds to an endpoint and delegates to the service
//! layer for the actual analysis.

use axum::{
    body::Bytes,
    extract::{
        multipart::{Multipart, MultipartRejection},
        rejection::JsonRejection,
        State,
    },
    http::Uri,
    response::{Html, Redirect},
    Json,
};
use tracing::{debug, info};

use super::dto::{AnalysisReport, HealthResponse, PredictRequest, PredictResponse};
use super::error::AppError;
use super::pages;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Multipart field carrying the uploaded CSV.
pub const DATASET_FIELD: &str = "dataset";

/// Uploaded CSV file.
struct Upload {
    file_name: Option<String>,
    bytes: Bytes,
}

/// Pull the `dataset` field out of a multipart body, skipping other fields.
async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Upload, AppError> {
    let mut multipart =
        multipart.map_err(|e| AppError::BadRequest(format!("Invalid upload: {}", e.body_text())))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid upload: {}", e.body_text())))?
    {
        if field.name() != Some(DATASET_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid upload: {}", e.body_text())))?;
        return Ok(Upload { file_name, bytes });
    }

    Err(AppError::BadRequest(format!(
        "Missing file field '{}'",
        DATASET_FIELD
    )))
}

/// Analyse the upload and publish its chart off the async runtime.
async fn analyze_upload(
    state: &AppState,
    upload: &Upload,
) -> Result<(AnalysisReport, String), AppError> {
    let charts = state.charts.clone();
    let bytes = upload.bytes.clone();

    let (report, chart_file) = tokio::task::spawn_blocking(move || {
        let report = services::analyze_csv(&bytes)?;
        let chart_file = charts.publish(&report.top_tokens)?;
        Ok::<_, crate::error::AnalysisError>((report, chart_file))
    })
    .await??;

    info!(
        analysis_id = %report.analysis_id,
        file = upload.file_name.as_deref().unwrap_or("<unnamed>"),
        bytes = upload.bytes.len(),
        rows = report.rows.len(),
        chart = %chart_file,
        "Processed upload"
    );
    Ok((report, chart_file))
}

// =============================================================================
// Pages
// =============================================================================

/// GET /
///
/// Upload form.
pub async fn index() -> Html<String> {
    Html(pages::render_index())
}

/// GET /process
///
/// The results page only exists as a POST response; send the browser back to
/// the form.
pub async fn process_redirect() -> Redirect {
    Redirect::to("/")
}

/// POST /process
///
/// Analyse an uploaded CSV and render the results page.
pub async fn process_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, AppError> {
    let upload = read_upload(multipart).await?;
    let (report, chart_file) = analyze_upload(&state, &upload).await?;
    Ok(Html(pages::render_results(
        &report,
        &chart_file,
        upload.file_name.as_deref(),
    )))
}

// =============================================================================
// JSON API
// =============================================================================

/// POST /predict
///
/// Classify a single text.
pub async fn predict(
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> HandlerResult<PredictResponse> {
    let Json(request) =
        payload.map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e.body_text())))?;
    let sentiment = services::predict(&request.text());
    Ok(Json(PredictResponse { sentiment }))
}

/// POST /v1/analyze
///
/// Analyse an uploaded CSV and return the full report as JSON.
pub async fn analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> HandlerResult<AnalysisReport> {
    let upload = read_upload(multipart).await?;
    let (report, _chart_file) = analyze_upload(&state, &upload).await?;
    Ok(Json(report))
}

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
