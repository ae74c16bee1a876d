use crate::demo::{run_analysis, run_demo, AnalyzeArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use supplier_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Supplier Intelligence Service",
    about = "Serve and demonstrate the supplier decision engine from the command line",
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
    /// Analyze one supplier from a CSV dataset and print the report
    Analyze(AnalyzeArgs),
    /// Run an end-to-end CLI demo over a built-in sample dataset
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured supplier dataset CSV path
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analysis(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
