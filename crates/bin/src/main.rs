use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;
mod store;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so JSON output on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("txguard=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from(cli.format);

    match &cli.command {
        Commands::Call(args) => {
            let store = store::open_store(cli.data.as_deref())?;
            commands::call::run(args, store, cli.user, format)
        }
        Commands::Tools => commands::call::list(format),
        Commands::Users => {
            let store = store::open_store(cli.data.as_deref())?;
            commands::data::users(&store, format)
        }
        Commands::Check(args) => commands::check::run(args, format),
        Commands::InitData(args) => commands::data::init(args),
    }
}
