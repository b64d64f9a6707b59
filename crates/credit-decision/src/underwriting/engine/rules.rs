use super::super::domain::LoanApplication;
use super::config::UnderwritingPolicy;
use super::policy::RiskTier;

/// Figures derived from an application before any rule fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct UnderwritingSignals {
    pub affordability_limit: f64,
    pub total_monthly_obligations: f64,
    pub debt_to_income: f64,
}

pub(crate) fn derive_signals(
    application: &LoanApplication,
    policy: &UnderwritingPolicy,
) -> UnderwritingSignals {
    let affordability_limit = application.monthly_income * policy.max_income_multiple;
    let total_monthly_obligations =
        application.existing_monthly_debt + application.requested_amount * policy.servicing_factor;
    let debt_to_income = total_monthly_obligations / application.monthly_income;

    UnderwritingSignals {
        affordability_limit,
        total_monthly_obligations,
        debt_to_income,
    }
}

pub(crate) fn exceeds_affordability(
    application: &LoanApplication,
    signals: &UnderwritingSignals,
) -> bool {
    application.requested_amount > signals.affordability_limit
}

pub(crate) fn exceeds_debt_to_income(
    signals: &UnderwritingSignals,
    policy: &UnderwritingPolicy,
) -> bool {
    signals.debt_to_income > policy.max_debt_to_income
}

/// Both band edges belong to the baseline tier.
pub(crate) fn risk_tier(debt_to_income: f64, policy: &UnderwritingPolicy) -> RiskTier {
    if debt_to_income < policy.low_risk_ceiling {
        RiskTier::Low
    } else if debt_to_income > policy.high_risk_floor {
        RiskTier::High
    } else {
        RiskTier::Baseline
    }
}

pub(crate) fn interest_rate(tier: RiskTier, policy: &UnderwritingPolicy) -> f64 {
    match tier {
        RiskTier::Low => policy.low_risk_rate,
        RiskTier::Baseline => policy.baseline_rate,
        RiskTier::High => policy.high_risk_rate,
    }
}
