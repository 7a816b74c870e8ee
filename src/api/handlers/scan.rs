//! Handlers for the scan endpoint.

use axum::{
    Form, Json,
    extract::{FromRequest, Query, Request, State},
    http::header::{self, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::scan::ScanRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Runs a scan from query-string parameters.
///
/// # Endpoint
///
/// `GET /scan?url=<value>[&format=csv|json]`
///
/// This is the direct API entry point documented on the landing page; it is
/// equivalent to submitting the form.
///
/// # Errors
///
/// - `400` - missing, empty, or malformed `url`; unknown `format`
/// - `502` - the target could not be retrieved
pub async fn scan_get_handler(
    State(state): State<AppState>,
    Query(params): Query<ScanRequest>,
) -> Result<Response, AppError> {
    run_scan(&state, &params).await
}

/// Runs a scan from a request body.
///
/// # Endpoint
///
/// `POST /scan`
///
/// Accepts `application/x-www-form-urlencoded` (the landing page form) and
/// `application/json` bodies carrying the same fields.
///
/// # Errors
///
/// - `400` - missing, empty, or malformed `url`; undecodable body
/// - `415` - any other content type
/// - `502` - the target could not be retrieved
pub async fn scan_post_handler(
    State(state): State<AppState>,
    ScanSubmission(params): ScanSubmission,
) -> Result<Response, AppError> {
    run_scan(&state, &params).await
}

/// Shared scan pipeline: validate, scan, encode, attach.
///
/// The report is served as a download so the browsing context opened by the
/// form receives a file instead of navigating away.
async fn run_scan(state: &AppState, params: &ScanRequest) -> Result<Response, AppError> {
    let format = params.report_format()?;
    let target = params.target()?;

    let report = state.scan_service.scan_url(target).await?;

    tracing::info!(
        source = %report.source,
        issues = report.summary.total,
        %format,
        "scan completed"
    );

    let body = report.render(format).map_err(|e| {
        AppError::internal("Failed to encode report", json!({ "reason": e.to_string() }))
    })?;

    let disposition = format!("attachment; filename=\"{}\"", report.file_name(format));

    Ok((
        [
            (CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// Content-type aware extractor for POST bodies.
///
/// The landing page form submits `application/x-www-form-urlencoded`; API
/// clients may send `application/json`. Anything else is refused with
/// `415 Unsupported Media Type`.
pub struct ScanSubmission(pub ScanRequest);

impl FromRequest<AppState> for ScanSubmission {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type.contains("application/json") {
            let Json(params) = Json::<ScanRequest>::from_request(req, state)
                .await
                .map_err(|e| {
                    AppError::bad_request("Invalid JSON body.", json!({ "reason": e.to_string() }))
                })?;
            return Ok(ScanSubmission(params));
        }

        if content_type.contains("application/x-www-form-urlencoded") {
            let Form(params) = Form::<ScanRequest>::from_request(req, state)
                .await
                .map_err(|e| {
                    AppError::bad_request("Invalid form body.", json!({ "reason": e.to_string() }))
                })?;
            return Ok(ScanSubmission(params));
        }

        Err(AppError::unsupported_media_type(
            format!("Unsupported Content-Type: {content_type}"),
            json!({ "content_type": content_type }),
        ))
    }
}
