//! Command dispatch logic for roadnet
use std::time::Instant;

use roadnet_core::error::{Result, RoadnetError};

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(RoadnetError::UsageError(
            "no command given (try `roadnet --help`)".to_string(),
        )),

        Some(Commands::Path { from, to, strategy }) => {
            commands::path::execute(cli, from, to, strategy, start)
        }

        Some(Commands::Traverse {
            start: from,
            strategy,
            conditions,
            ignore_file_conditions,
        }) => commands::traverse::execute(
            cli,
            from,
            strategy,
            conditions,
            *ignore_file_conditions,
            start,
        ),

        Some(Commands::Show { conditions, output }) => {
            commands::show::execute(cli, conditions, output.as_deref(), start)
        }
    }
}
