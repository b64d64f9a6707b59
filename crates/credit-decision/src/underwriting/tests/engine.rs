use super::common::*;
use crate::underwriting::domain::LoanApplication;
use crate::underwriting::engine::{Decision, DeclineReason, RiskTier};

#[test]
fn declines_requests_above_six_months_of_income() {
    let decision = engine().decide(&validated(application_with(10000.0, 70000.0, 0.0)));

    match &decision {
        Decision::Declined {
            risk_score,
            reason: DeclineReason::ExceedsIncomeMultiple {
                requested, limit, ..
            },
        } => {
            assert_eq!(*risk_score, 10);
            assert_eq!(*requested, 70000.0);
            assert_eq!(*limit, 60000.0);
        }
        other => panic!("expected affordability decline, got {other:?}"),
    }
    assert!(decision.summary().contains("exceeds 6× monthly income"));
    assert_eq!(decision.approved_amount(), 0.0);
    assert_eq!(decision.interest_rate(), 0.0);
    assert!(decision.monthly_payment().is_none());
}

#[test]
fn affordability_rule_fires_before_debt_to_income() {
    // Debt alone would breach the ratio ceiling; the income multiple wins.
    let decision = engine().decide(&validated(application_with(1000.0, 6001.0, 900.0)));

    assert_eq!(decision.risk_score(), 10);
}

#[test]
fn request_exactly_at_income_multiple_is_not_declined_for_affordability() {
    let decision = engine().decide(&validated(application_with(5000.0, 30000.0, 0.0)));

    assert_ne!(decision.risk_score(), 10);
}

#[test]
fn declines_when_debt_to_income_exceeds_ceiling() {
    let decision = engine().decide(&validated(application_with(5000.0, 20000.0, 2500.0)));

    match decision {
        Decision::Declined {
            risk_score,
            reason: DeclineReason::DebtToIncomeTooHigh { ratio, ceiling },
        } => {
            assert_eq!(risk_score, 20);
            assert!((ratio - 0.62).abs() < 1e-12);
            assert_eq!(ceiling, 0.6);
        }
        other => panic!("expected debt-to-income decline, got {other:?}"),
    }
}

#[test]
fn ratio_at_ceiling_is_approved_at_high_risk_rate() {
    // (2400 + 600) / 5000 = 0.6
    let decision = engine().decide(&validated(application_with(5000.0, 20000.0, 2400.0)));

    match decision {
        Decision::Approved {
            risk_tier,
            interest_rate,
            ..
        } => {
            assert_eq!(risk_tier, RiskTier::High);
            assert_eq!(interest_rate, 12.5);
        }
        other => panic!("expected approval, got {other:?}"),
    }
}

#[test]
fn low_ratio_earns_low_risk_rate() {
    let decision = engine().decide(&validated(application()));

    match decision {
        Decision::Approved {
            risk_score,
            risk_tier,
            approved_amount,
            interest_rate,
            monthly_payment,
        } => {
            assert_eq!(risk_score, 75);
            assert_eq!(risk_tier, RiskTier::Low);
            assert_eq!(approved_amount, 10000.0);
            assert_eq!(interest_rate, 6.5);
            assert_eq!(monthly_payment, 445.46);
        }
        other => panic!("expected approval, got {other:?}"),
    }
}

#[test]
fn band_edges_use_baseline_rate() {
    for debt in [1200.0, 1700.0, 2200.0] {
        let decision = engine().decide(&validated(application_with(5000.0, 10000.0, debt)));
        assert_eq!(
            decision.interest_rate(),
            8.5,
            "debt {debt} should price at the baseline rate"
        );
    }
}

#[test]
fn repeated_evaluation_is_identical() {
    let input = validated(application_with(5000.0, 20000.0, 900.0));
    let first = engine().decide(&input);
    let second = engine().decide(&input);

    assert_eq!(first, second);
}

#[test]
fn view_omits_payment_for_declines() {
    let declined = engine()
        .decide(&validated(application_with(5000.0, 20000.0, 2500.0)))
        .view();

    let payload = serde_json::to_value(&declined).expect("serializes");
    assert_eq!(payload["approved"], false);
    assert_eq!(payload["riskScore"], 20);
    assert_eq!(payload["approvedAmount"], 0.0);
    assert_eq!(payload["interestRate"], 0.0);
    assert_eq!(payload["reason"], "debt-to-income ratio too high");
    assert!(payload.get("monthlyPayment").is_none());
}

#[test]
fn view_carries_payment_for_approvals() {
    let approved = engine().decide(&validated(application())).view();

    assert!(approved.approved);
    assert_eq!(approved.reason, "application approved");
    assert_eq!(approved.monthly_payment, Some(445.46));
}

#[test]
fn very_long_term_approval_carries_finite_payment() {
    let application = LoanApplication {
        term_months: 200_000,
        ..application()
    };

    let decision = engine().decide(&validated(application));

    assert!(decision.is_approved());
    assert_eq!(decision.monthly_payment(), Some(54.17));
    let payload = serde_json::to_value(decision.view()).expect("serializes");
    assert_eq!(payload["monthlyPayment"], 54.17);
}
