mod config;
mod policy;
mod rules;

pub use config::UnderwritingPolicy;
pub use policy::{Decision, DecisionView, DeclineReason, RiskTier};

use super::amortization::monthly_payment;
use super::validation::ValidatedApplication;

/// Stateless evaluator that applies the underwriting policy to an application.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    policy: UnderwritingPolicy,
}

impl DecisionEngine {
    pub fn new(policy: UnderwritingPolicy) -> Self {
        Self { policy }
    }

    /// Apply the hard rules in order and price the loan if both pass.
    pub fn decide(&self, application: &ValidatedApplication) -> Decision {
        let application = application.application();
        let signals = rules::derive_signals(application, &self.policy);

        if rules::exceeds_affordability(application, &signals) {
            return Decision::Declined {
                risk_score: self.policy.affordability_decline_score,
                reason: DeclineReason::ExceedsIncomeMultiple {
                    requested: application.requested_amount,
                    limit: signals.affordability_limit,
                    multiple: self.policy.max_income_multiple,
                },
            };
        }

        if rules::exceeds_debt_to_income(&signals, &self.policy) {
            return Decision::Declined {
                risk_score: self.policy.debt_to_income_decline_score,
                reason: DeclineReason::DebtToIncomeTooHigh {
                    ratio: signals.debt_to_income,
                    ceiling: self.policy.max_debt_to_income,
                },
            };
        }

        let risk_tier = rules::risk_tier(signals.debt_to_income, &self.policy);
        let interest_rate = rules::interest_rate(risk_tier, &self.policy);

        Decision::Approved {
            risk_score: self.policy.approved_score,
            risk_tier,
            approved_amount: application.requested_amount,
            interest_rate,
            monthly_payment: monthly_payment(
                application.requested_amount,
                interest_rate,
                application.term_months,
            ),
        }
    }
}

/// Evaluate with the default underwriting policy.
pub fn decide(application: &ValidatedApplication) -> Decision {
    DecisionEngine::default().decide(application)
}
