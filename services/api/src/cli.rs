use crate::oneshot::{run_describe, DescribeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pokebase::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Pokebase API",
    about = "Serve the Pokebase description and battle-advisor endpoints",
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
    /// Render one Pokémon description (or a comparison) to stdout and exit
    Describe(DescribeArgs),
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
        Command::Describe(args) => run_describe(args).await,
    }
}
