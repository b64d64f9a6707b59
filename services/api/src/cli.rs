use crate::commands::{run_evaluate, run_schedule, EvaluateArgs, ScheduleArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_decision::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Decision Service",
    about = "Evaluate loan applications and quote repayment schedules",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate and decide a single loan application, printing the decision as JSON
    Evaluate(EvaluateArgs),
    /// Print the amortized repayment schedule for a principal, rate, and term
    Schedule(ScheduleArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the simulated processing delay in milliseconds
    #[arg(long)]
    pub(crate) delay_ms: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Schedule(args) => run_schedule(args),
    }
}
