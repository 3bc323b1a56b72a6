use carrier_risk::error::AppError;
use clap::{Args, Parser, Subcommand};

use crate::demo::{run_preview, PreviewArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Carrier Risk Bot",
    about = "Slash-command webhook posting carrier risk summaries to chat callbacks",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the webhook service (default command)
    Serve(ServeArgs),
    /// Render a sample or file-supplied assessment to stdout
    Preview(PreviewArgs),
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
        Command::Preview(args) => run_preview(args),
    }
}
