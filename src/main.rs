use clap::Parser;
use folio_api::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => cli::serve::run(cli::serve::ServeArgs::default()).await,
        Some(Command::Serve(args)) => cli::serve::run(args).await,
        Some(Command::Config) => cli::show_config::run(),
    }
}
