//! Fixed-rate, fully amortizing loan payments.
//!
//! The level payment follows the standard annuity formula
//! `P * r * (1 + r)^n / ((1 + r)^n - 1)` with `r` the nominal annual rate
//! divided by twelve. A zero rate falls back to straight-line repayment.
//! Schedules are capped at [`MAX_SCHEDULE_TERM_MONTHS`] rows.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Longest term a schedule quote will expand, one hundred years of installments.
pub const MAX_SCHEDULE_TERM_MONTHS: u32 = 1200;

/// Rejected schedule quote inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error("principal must be a positive amount (found {0})")]
    InvalidPrincipal(f64),
    #[error("annual rate must be a non-negative percentage (found {0})")]
    InvalidRate(f64),
    #[error("term must be at least one month")]
    InvalidTerm,
    #[error("term of {found} months exceeds the {max} month schedule limit")]
    TermTooLong { max: u32, found: u32 },
    #[error("due date for period {period} is out of range")]
    DueDateOverflow { period: u32 },
}

/// Round half-up on the cents digit.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

fn level_payment(principal: f64, annual_rate_percent: f64, term_months: u32) -> f64 {
    let rate = monthly_rate(annual_rate_percent);
    if rate == 0.0 {
        return principal / f64::from(term_months);
    }

    // Discount form stays finite for long terms, tending to `principal * rate`.
    let discount = (1.0 + rate).powf(-f64::from(term_months));
    principal * rate / (1.0 - discount)
}

/// Monthly payment rounded to cents.
///
/// Callers guarantee `term_months >= 1`, a positive principal, and a
/// non-negative rate; the decision engine only reaches this with validated
/// applications.
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_months: u32) -> f64 {
    round_to_cents(level_payment(principal, annual_rate_percent, term_months))
}

/// One row of a repayment schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    pub period: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub remaining_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentSchedule {
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub installments: Vec<Installment>,
}

/// Build the full period-by-period schedule.
///
/// Interest accrues on the cent-rounded opening balance. The last
/// installment clears whatever balance remains so the loan retires exactly.
pub fn schedule(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
    first_payment_date: Option<NaiveDate>,
) -> Result<RepaymentSchedule, ScheduleError> {
    if !(principal.is_finite() && principal > 0.0) {
        return Err(ScheduleError::InvalidPrincipal(principal));
    }
    if !(annual_rate_percent.is_finite() && annual_rate_percent >= 0.0) {
        return Err(ScheduleError::InvalidRate(annual_rate_percent));
    }
    if term_months == 0 {
        return Err(ScheduleError::InvalidTerm);
    }
    if term_months > MAX_SCHEDULE_TERM_MONTHS {
        return Err(ScheduleError::TermTooLong {
            max: MAX_SCHEDULE_TERM_MONTHS,
            found: term_months,
        });
    }

    let payment = monthly_payment(principal, annual_rate_percent, term_months);
    let rate = monthly_rate(annual_rate_percent);

    let mut balance = round_to_cents(principal);
    let mut total_paid = 0.0;
    let mut total_interest = 0.0;
    let mut installments = Vec::with_capacity(term_months as usize);

    for period in 1..=term_months {
        let interest = round_to_cents(balance * rate);
        let (principal_portion, period_payment) = if period == term_months {
            (balance, round_to_cents(balance + interest))
        } else {
            let portion = round_to_cents(payment - interest).min(balance);
            (portion, round_to_cents(portion + interest))
        };
        balance = round_to_cents(balance - principal_portion);

        let due_date = match first_payment_date {
            Some(first) => Some(
                first
                    .checked_add_months(Months::new(period - 1))
                    .ok_or(ScheduleError::DueDateOverflow { period })?,
            ),
            None => None,
        };

        total_paid += period_payment;
        total_interest += interest;
        installments.push(Installment {
            period,
            due_date,
            payment: period_payment,
            principal: principal_portion,
            interest,
            remaining_balance: balance,
        });
    }

    Ok(RepaymentSchedule {
        monthly_payment: payment,
        total_paid: round_to_cents(total_paid),
        total_interest: round_to_cents(total_interest),
        installments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_on_cents() {
        assert_eq!(round_to_cents(12.345), 12.35);
        assert_eq!(round_to_cents(12.344), 12.34);
        assert_eq!(round_to_cents(0.005), 0.01);
    }

    #[test]
    fn zero_rate_repays_straight_line() {
        assert_eq!(monthly_payment(1200.0, 0.0, 12), 100.0);
    }
}
