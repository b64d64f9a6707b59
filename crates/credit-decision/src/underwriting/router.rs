use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::amortization::schedule;
use super::domain::LoanApplication;
use super::service::CreditDecisionService;
use super::validation::ValidationError;

/// Router builder exposing loan submission and schedule quotes.
pub fn loan_router(service: Arc<CreditDecisionService>) -> Router {
    Router::new()
        .route("/api/v1/loan/applications", post(submit_handler))
        .route("/api/v1/loan/schedule", post(schedule_handler))
        .with_state(service)
}

pub(crate) async fn submit_handler(
    State(service): State<Arc<CreditDecisionService>>,
    axum::Json(application): axum::Json<LoanApplication>,
) -> Response {
    match service.submit(application).await {
        Ok(decision) => (StatusCode::OK, axum::Json(decision.view())).into_response(),
        Err(error @ ValidationError::InvalidFields { .. }) => {
            let payload = json!({
                "error": error.to_string(),
                "fields": error.fields(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

/// Ad-hoc quote for a principal, rate, and term.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub principal: f64,
    pub annual_rate: f64,
    pub term_months: u32,
    #[serde(default)]
    pub first_payment_date: Option<NaiveDate>,
}

pub(crate) async fn schedule_handler(axum::Json(request): axum::Json<ScheduleRequest>) -> Response {
    match schedule(
        request.principal,
        request.annual_rate,
        request.term_months,
        request.first_payment_date,
    ) {
        Ok(plan) => (StatusCode::OK, axum::Json(plan)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
