//! brawldex CLI
//!
//! Serves the Brawl Stars maps and brawlers site and maintains its data
//! documents.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::cli_types::{Cli, Commands, ConfigAction, DataArgs};
use crate::error::CliError;
use crate::settings::{Overrides, Settings};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!(
            "{} {}",
            "Error:".if_supports_color(Stderr, |t| t.red()),
            e
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Serve {
            data,
            bind,
            static_dir,
        } => {
            let overrides = Overrides {
                bind,
                static_dir,
                ..data_overrides(data)
            };
            let settings = Settings::load(&overrides, config)?;
            commands::serve::run_serve(&settings)
        }
        Commands::Refresh { data, api_url } => {
            let overrides = Overrides {
                api_url,
                ..data_overrides(data)
            };
            let settings = Settings::load(&overrides, config)?;
            commands::refresh::run_refresh(&settings, cli.quiet)
        }
        Commands::Check { data } => {
            let settings = Settings::load(&data_overrides(data), config)?;
            commands::check::run_check(&settings)
        }
        Commands::Slug { names } => {
            commands::slug::run_slug(&names);
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let settings = Settings::load(&Overrides::default(), config)?;
                commands::config::run_config_show(&settings, config);
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path(config);
                Ok(())
            }
        },
    }
}

fn data_overrides(data: DataArgs) -> Overrides {
    Overrides {
        data_dir: data.data_dir,
        ..Default::default()
    }
}
