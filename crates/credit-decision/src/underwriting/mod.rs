//! Loan application intake, underwriting decisions, and repayment quotes.

pub mod amortization;
pub mod domain;
pub mod engine;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use amortization::{
    monthly_payment, round_to_cents, schedule, Installment, RepaymentSchedule, ScheduleError,
    MAX_SCHEDULE_TERM_MONTHS,
};
pub use domain::{ApplicationField, LoanApplication};
pub use engine::{
    decide, Decision, DecisionEngine, DecisionView, DeclineReason, RiskTier, UnderwritingPolicy,
};
pub use router::{loan_router, ScheduleRequest};
pub use service::CreditDecisionService;
pub use validation::{validate, ValidatedApplication, ValidationError};
