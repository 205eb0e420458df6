mod cli;
mod client;
mod commands;
mod config;
mod cutoff;
mod error;
mod fetcher;
mod logging;
mod output;
mod pagination;
mod types;

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands};
use error::Result;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    logging::init(verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");

        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let format = cli.output_format();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "pr-fetcher", &mut io::stdout());
        }
        Some(Commands::Init) => {
            commands::init::run()?;
        }
        None => {
            commands::fetch::run(&cli.fetch, format).await?;
        }
    }

    Ok(())
}
