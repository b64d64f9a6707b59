use std::fmt;

use serde::{Deserialize, Serialize};

/// Loan request as collected by the presentation layer.
///
/// Nothing here is trusted until it has passed through
/// [`validate`](super::validation::validate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub applicant_name: String,
    pub email: String,
    pub monthly_income: f64,
    pub requested_amount: f64,
    pub existing_monthly_debt: f64,
    pub term_months: u32,
}

/// Application fields that can fail intake validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationField {
    ApplicantName,
    Email,
    MonthlyIncome,
    RequestedAmount,
    ExistingMonthlyDebt,
    TermMonths,
}

impl ApplicationField {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationField::ApplicantName => "applicantName",
            ApplicationField::Email => "email",
            ApplicationField::MonthlyIncome => "monthlyIncome",
            ApplicationField::RequestedAmount => "requestedAmount",
            ApplicationField::ExistingMonthlyDebt => "existingMonthlyDebt",
            ApplicationField::TermMonths => "termMonths",
        }
    }
}

impl fmt::Display for ApplicationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
