//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Rules**: The rule registry must be non-empty
/// 2. **Fetcher**: The HTTP client is constructed at startup; its presence is
///    reported for operational visibility
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let rules_check = check_rules(&state);
    let fetcher_check = CheckStatus {
        status: "ok".to_string(),
        message: Some("Client ready".to_string()),
    };

    let all_healthy = rules_check.status == "ok" && fetcher_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            rules: rules_check,
            fetcher: fetcher_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the rule registry is populated.
fn check_rules(state: &AppState) -> CheckStatus {
    let count = state.scan_service.rule_count();

    if count == 0 {
        CheckStatus {
            status: "error".to_string(),
            message: Some("No rules loaded".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{count} rules loaded")),
        }
    }
}
