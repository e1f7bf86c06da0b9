use crate::commands::{run_fetch, run_import, run_report, FetchArgs, ImportArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use staff_registry::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Staff Registry",
    about = "Import, sync, and report on the employee registry from the command line",
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
    /// Import a CSV batch and print the outcome with a workforce summary
    Import(ImportArgs),
    /// Pull employees from the remote user directory
    Fetch(FetchArgs),
    /// Import a CSV batch and list employees alongside the workforce summary
    Report(ReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Import(args) => run_import(args),
        Command::Fetch(args) => run_fetch(args).await,
        Command::Report(args) => run_report(args),
    }
}
