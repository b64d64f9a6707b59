use serde::{Deserialize, Serialize};

/// Underwriting thresholds, rate tiers, and the scores assigned per branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnderwritingPolicy {
    /// Requested amount may not exceed this many months of income.
    pub max_income_multiple: f64,
    /// Fraction of principal used as the new loan's monthly servicing proxy.
    pub servicing_factor: f64,
    pub max_debt_to_income: f64,
    /// Ratios strictly below this earn the low-risk rate.
    pub low_risk_ceiling: f64,
    /// Ratios strictly above this earn the high-risk rate.
    pub high_risk_floor: f64,
    pub low_risk_rate: f64,
    pub baseline_rate: f64,
    pub high_risk_rate: f64,
    pub affordability_decline_score: u8,
    pub debt_to_income_decline_score: u8,
    pub approved_score: u8,
}

impl Default for UnderwritingPolicy {
    fn default() -> Self {
        Self {
            max_income_multiple: 6.0,
            servicing_factor: 0.03,
            max_debt_to_income: 0.6,
            low_risk_ceiling: 0.3,
            high_risk_floor: 0.5,
            low_risk_rate: 6.5,
            baseline_rate: 8.5,
            high_risk_rate: 12.5,
            affordability_decline_score: 10,
            debt_to_income_decline_score: 20,
            approved_score: 75,
        }
    }
}
