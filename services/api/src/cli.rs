use crate::demo::{run_avaliar, run_demo, AvaliarArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use corretor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Corretor de Redação",
    about = "Run the rule-based ENEM essay grading service or grade essays from the command line",
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
    /// Grade a single essay from a file and print the report
    Avaliar(AvaliarArgs),
    /// Grade a built-in sample essay end to end
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
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Avaliar(args) => run_avaliar(args),
        Command::Demo(args) => run_demo(args),
    }
}
