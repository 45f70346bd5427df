use crate::demo::{run_catalog, run_quote, CatalogArgs, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use plan_finder::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Plan Finder",
    about = "Validate applicant selections and compare insurance plans from the command line",
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
    /// Print the inpatient and outpatient limit options
    Catalog(CatalogArgs),
    /// Validate a selection and fetch matching plans
    Quote(QuoteArgs),
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
        Command::Catalog(args) => run_catalog(args),
        Command::Quote(args) => run_quote(args).await,
    }
}
