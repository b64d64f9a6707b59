use std::time::Duration;

use tracing::{info, warn};

use super::domain::LoanApplication;
use super::engine::{Decision, DecisionEngine, UnderwritingPolicy};
use super::validation::{validate, ValidationError};

/// Service composing intake validation with the decision engine.
///
/// The processing delay is exposed for transports to await; evaluation
/// itself never sleeps.
#[derive(Debug, Clone)]
pub struct CreditDecisionService {
    engine: DecisionEngine,
    processing_delay: Duration,
}

impl Default for CreditDecisionService {
    fn default() -> Self {
        Self::new(UnderwritingPolicy::default(), Duration::ZERO)
    }
}

impl CreditDecisionService {
    pub fn new(policy: UnderwritingPolicy, processing_delay: Duration) -> Self {
        Self {
            engine: DecisionEngine::new(policy),
            processing_delay,
        }
    }

    /// Validate an application and, if it is submittable, decide it.
    pub fn evaluate(&self, application: LoanApplication) -> Result<Decision, ValidationError> {
        let validated = validate(application).map_err(|error| {
            warn!(fields = ?error.fields(), "loan application rejected at intake");
            error
        })?;

        let decision = self.engine.decide(&validated);
        match &decision {
            Decision::Approved {
                risk_tier,
                interest_rate,
                ..
            } => info!(
                risk_tier = risk_tier.label(),
                interest_rate, "loan application approved"
            ),
            Decision::Declined { reason, .. } => {
                info!(reason = %reason.summary(), "loan application declined")
            }
        }

        Ok(decision)
    }

    /// Await the simulated latency, then evaluate.
    pub async fn submit(&self, application: LoanApplication) -> Result<Decision, ValidationError> {
        if !self.processing_delay.is_zero() {
            tokio::time::sleep(self.processing_delay).await;
        }
        self.evaluate(application)
    }
}
