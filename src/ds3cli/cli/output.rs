//! The output sink: exactly one envelope per run, on stdout.

use ds3cli::envelope::Status;
use ds3cli::error::Result;
use ds3cli::logf;
use ds3cli::logging::Logger;
use ds3cli::result::CmdResult;
use ds3cli::views;
use std::io::Write;

/// Renders the command outcome and writes it to `out`.
///
/// A failed command, or a result that cannot be rendered, is written as the
/// ERROR envelope. Only a failure to produce that envelope is returned.
pub fn emit<W: Write>(
    out: &mut W,
    outcome: Result<CmdResult>,
    logger: &dyn Logger,
) -> Result<Status> {
    let (status, text) = match outcome.and_then(|result| views::render(result, logger)) {
        Ok(text) => (Status::Ok, text),
        Err(error) => {
            logf!(logger, "Command failed: {:?}", error);
            (Status::Error, views::render_error(&error)?)
        }
    };

    writeln!(out, "{}", text)?;
    out.flush()?;
    Ok(status)
}

pub fn exit_code(status: Status) -> i32 {
    match status {
        Status::Ok => 0,
        Status::Error => 1,
    }
}
