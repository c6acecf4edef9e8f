//! Command implementations for all shortpath commands

use crate::cli::{Commands, ConfigCommands};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{compare, config, demo, solve};
use shortpath_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Solve(args) => solve::execute(ctx, args),
            Commands::Compare(args) => compare::execute(ctx, args),
            Commands::Demo(args) => demo::execute(ctx, args),
            Commands::Config { command } => match command {
                ConfigCommands::Show => config::execute_show(ctx),
                ConfigCommands::Path => config::execute_path(ctx),
            },
        }
    }
}
