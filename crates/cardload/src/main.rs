mod cli;
mod color;
mod commands;
mod config;
mod importer;
mod output;
mod schema;
mod ticket;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use output::output_error;
use std::process::ExitCode;
use trello_backend::TrelloClient;

fn main() -> ExitCode {
    let cli = Cli::parse();
    color::init(cli.color);

    if let Err(e) = run(&cli) {
        output_error(&e, cli.format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    // Validation is purely local; no config or client needed
    if let Commands::Validate { file } = &cli.command {
        return commands::validate::handle_validate(file, cli.format);
    }

    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(
        cli.api_url.clone(),
        cli.api_key.clone(),
        cli.api_token.clone(),
        cli.board.clone(),
        cli.list.clone(),
    );
    config.validate()?;

    let client = TrelloClient::new(
        config.api_url(),
        config.api_key.as_ref().unwrap(),
        config.api_token.as_ref().unwrap(),
        config.board.as_ref().unwrap(),
    );

    match &cli.command {
        Commands::Lists => commands::lists::handle_lists(&client, cli.format),
        Commands::Labels => commands::labels::handle_labels(&client, cli.format),
        Commands::Import { file } => {
            config.validate_list()?;
            commands::import::handle_import(
                &client,
                config.list.as_ref().unwrap(),
                file,
                cli.format,
            )
        }
        Commands::Validate { .. } => unreachable!("validate is handled before config loading"),
    }
}
