use serde::{Deserialize, Serialize};

/// Discrete interest-rate bucket assigned from the debt-to-income ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Baseline,
    High,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Baseline => "baseline",
            RiskTier::High => "high",
        }
    }
}

/// Hard rules whose failure declines an application outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeclineReason {
    ExceedsIncomeMultiple {
        requested: f64,
        limit: f64,
        multiple: f64,
    },
    DebtToIncomeTooHigh { ratio: f64, ceiling: f64 },
}

impl DeclineReason {
    pub fn summary(&self) -> String {
        match self {
            DeclineReason::ExceedsIncomeMultiple { multiple, .. } => {
                format!("requested amount exceeds {multiple}× monthly income")
            }
            DeclineReason::DebtToIncomeTooHigh { .. } => "debt-to-income ratio too high".to_string(),
        }
    }
}

/// Outcome of a single evaluation. Only approvals carry a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    Approved {
        risk_score: u8,
        risk_tier: RiskTier,
        approved_amount: f64,
        interest_rate: f64,
        monthly_payment: f64,
    },
    Declined {
        risk_score: u8,
        reason: DeclineReason,
    },
}

impl Decision {
    pub fn is_approved(&self) -> bool {
        matches!(self, Decision::Approved { .. })
    }

    pub fn risk_score(&self) -> u8 {
        match self {
            Decision::Approved { risk_score, .. } | Decision::Declined { risk_score, .. } => {
                *risk_score
            }
        }
    }

    pub fn approved_amount(&self) -> f64 {
        match self {
            Decision::Approved {
                approved_amount, ..
            } => *approved_amount,
            Decision::Declined { .. } => 0.0,
        }
    }

    pub fn interest_rate(&self) -> f64 {
        match self {
            Decision::Approved { interest_rate, .. } => *interest_rate,
            Decision::Declined { .. } => 0.0,
        }
    }

    pub fn monthly_payment(&self) -> Option<f64> {
        match self {
            Decision::Approved {
                monthly_payment, ..
            } => Some(*monthly_payment),
            Decision::Declined { .. } => None,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Decision::Approved { .. } => "application approved".to_string(),
            Decision::Declined { reason, .. } => reason.summary(),
        }
    }

    pub fn view(&self) -> DecisionView {
        DecisionView {
            risk_score: self.risk_score(),
            approved: self.is_approved(),
            approved_amount: self.approved_amount(),
            interest_rate: self.interest_rate(),
            reason: self.summary(),
            monthly_payment: self.monthly_payment(),
        }
    }
}

/// Wire representation handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionView {
    pub risk_score: u8,
    pub approved: bool,
    pub approved_amount: f64,
    pub interest_rate: f64,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<f64>,
}

impl From<&Decision> for DecisionView {
    fn from(decision: &Decision) -> Self {
        decision.view()
    }
}
