use axum::response::Response;
use serde_json::Value;

use crate::underwriting::domain::LoanApplication;
use crate::underwriting::engine::DecisionEngine;
use crate::underwriting::validation::{validate, ValidatedApplication};
use crate::underwriting::{loan_router, CreditDecisionService};

pub(super) fn application() -> LoanApplication {
    LoanApplication {
        applicant_name: "Jordan Blake".to_string(),
        email: "jordan.blake@example.com".to_string(),
        monthly_income: 5000.0,
        requested_amount: 10000.0,
        existing_monthly_debt: 500.0,
        term_months: 24,
    }
}

pub(super) fn application_with(
    monthly_income: f64,
    requested_amount: f64,
    existing_monthly_debt: f64,
) -> LoanApplication {
    LoanApplication {
        monthly_income,
        requested_amount,
        existing_monthly_debt,
        ..application()
    }
}

pub(super) fn validated(application: LoanApplication) -> ValidatedApplication {
    validate(application).expect("fixture application is valid")
}

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::default()
}

pub(super) fn service() -> CreditDecisionService {
    CreditDecisionService::default()
}

pub(super) fn router() -> axum::Router {
    loan_router(std::sync::Arc::new(service()))
}

pub(super) fn invalid_email_application() -> LoanApplication {
    LoanApplication {
        email: "not-an-email".to_string(),
        ..application()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
