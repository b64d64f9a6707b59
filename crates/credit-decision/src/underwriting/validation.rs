use super::domain::{ApplicationField, LoanApplication};

/// Raised when an application cannot be submitted to the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("application is not submittable: invalid {}", join_fields(.fields))]
    InvalidFields { fields: Vec<ApplicationField> },
}

impl ValidationError {
    pub fn fields(&self) -> &[ApplicationField] {
        match self {
            ValidationError::InvalidFields { fields } => fields,
        }
    }
}

fn join_fields(fields: &[ApplicationField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Application that passed every intake check.
///
/// Only [`validate`] constructs this type, so holding one is proof the
/// decision engine's preconditions hold.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedApplication(LoanApplication);

impl ValidatedApplication {
    pub fn application(&self) -> &LoanApplication {
        &self.0
    }
}

/// Check every intake constraint at once, reporting all failing fields.
pub fn validate(application: LoanApplication) -> Result<ValidatedApplication, ValidationError> {
    let mut fields = Vec::new();

    if application.applicant_name.trim().is_empty() {
        fields.push(ApplicationField::ApplicantName);
    }
    if !application.email.contains('@') {
        fields.push(ApplicationField::Email);
    }
    if !is_positive(application.monthly_income) {
        fields.push(ApplicationField::MonthlyIncome);
    }
    if !is_positive(application.requested_amount) {
        fields.push(ApplicationField::RequestedAmount);
    }
    if application.term_months == 0 {
        fields.push(ApplicationField::TermMonths);
    }
    if !(application.existing_monthly_debt.is_finite() && application.existing_monthly_debt >= 0.0)
    {
        fields.push(ApplicationField::ExistingMonthlyDebt);
    }

    if fields.is_empty() {
        Ok(ValidatedApplication(application))
    } else {
        Err(ValidationError::InvalidFields { fields })
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
