//! # CLI Layer
//!
//! The only part of ds3cli that touches the process: arguments, the config
//! file, stdin, stdout and exit codes. It turns arguments into a
//! [`CmdResult`](ds3cli::result::CmdResult), hands it to the views, and writes
//! the envelope through [`output::emit`].
//!
//! Setup failures (unreadable config and the like) are command failures too and
//! come out as an ERROR envelope.

use clap::Parser;
use ds3cli::config::{config_dir, Ds3Config};
use ds3cli::envelope::Status;
use ds3cli::error::Result;
use ds3cli::logf;
use ds3cli::logging::{Logger, StderrLogger};
use std::path::PathBuf;

mod args;
mod commands;
pub mod output;

use args::Cli;

pub struct AppContext {
    pub config_dir: PathBuf,
    pub config: Ds3Config,
    pub logger: StderrLogger,
}

pub fn run() -> Result<Status> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match init_context(&cli) {
        Ok(ctx) => {
            let outcome = commands::execute(&ctx, &cli.command);
            output::emit(&mut out, outcome, &ctx.logger)
        }
        Err(e) => output::emit(&mut out, Err(e), &StderrLogger::new(cli.verbose)),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = config_dir(cli.config_dir.as_deref())?;
    let config = Ds3Config::load(&dir)?.merge_flags(cli.verbose, cli.force);
    let logger = StderrLogger::new(config.verbose);

    logf!(logger, "Using config dir {}", dir.display());
    if config.force {
        logger.log("Tape failures will be ignored");
    }

    Ok(AppContext {
        config_dir: dir,
        config,
        logger,
    })
}
