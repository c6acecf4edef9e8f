//! Command dispatch logic for shortpath

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::cli::Cli;
use shortpath_core::error::Result;

pub(crate) mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};
use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    trace_command!(cli, start, "install_interrupt_handler");

    let ctx = CommandContext::new(cli, start, interrupted);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
