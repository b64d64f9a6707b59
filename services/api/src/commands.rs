use crate::infra::parse_date;
use chrono::NaiveDate;
use clap::Args;
use credit_decision::error::AppError;
use credit_decision::underwriting::{schedule, CreditDecisionService, LoanApplication};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding a camelCase loan application; overrides the field flags
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    #[arg(long, default_value = "")]
    pub(crate) applicant_name: String,
    #[arg(long, default_value = "")]
    pub(crate) email: String,
    #[arg(long, default_value_t = 0.0)]
    pub(crate) monthly_income: f64,
    #[arg(long, default_value_t = 0.0)]
    pub(crate) requested_amount: f64,
    #[arg(long, default_value_t = 0.0)]
    pub(crate) existing_monthly_debt: f64,
    #[arg(long, default_value_t = 0)]
    pub(crate) term_months: u32,
}

impl EvaluateArgs {
    fn into_application(self) -> Result<LoanApplication, AppError> {
        if let Some(path) = self.file {
            let raw = std::fs::read_to_string(path)?;
            return Ok(serde_json::from_str(&raw)?);
        }

        Ok(LoanApplication {
            applicant_name: self.applicant_name,
            email: self.email,
            monthly_income: self.monthly_income,
            requested_amount: self.requested_amount,
            existing_monthly_debt: self.existing_monthly_debt,
            term_months: self.term_months,
        })
    }
}

#[derive(Args, Debug)]
pub(crate) struct ScheduleArgs {
    /// Loan principal
    #[arg(long)]
    pub(crate) principal: f64,
    /// Nominal annual interest rate in percent (e.g. 8.5)
    #[arg(long)]
    pub(crate) annual_rate: f64,
    /// Number of monthly installments
    #[arg(long)]
    pub(crate) term_months: u32,
    /// First installment due date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) first_payment: Option<NaiveDate>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let application = args.into_application()?;
    let service = CreditDecisionService::default();
    let decision = service.evaluate(application)?;

    println!("{}", serde_json::to_string_pretty(&decision.view())?);
    Ok(())
}

pub(crate) fn run_schedule(args: ScheduleArgs) -> Result<(), AppError> {
    let plan = schedule(
        args.principal,
        args.annual_rate,
        args.term_months,
        args.first_payment,
    )?;

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
