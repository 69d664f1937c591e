//! # Diagnostic Logging
//!
//! Verbose diagnostics are an orthogonal facility: the render pipeline never
//! depends on them, and nothing here touches stdout. There is no process-wide
//! logger. A [`Logger`] is built once at startup with the verbosity decided
//! there, and passed as `&dyn Logger` to whatever wants to report progress.
//!
//! ## Implementations
//!
//! - [`StderrLogger`]: production sink, dimmed lines on stderr
//! - [`MemoryLogger`]: collects lines in memory for tests
//!   (available under `cfg(test)` or the `test_utils` feature)
//!
//! Formatted messages go through the [`logf!`](crate::logf) macro so arguments
//! are only rendered when verbose mode is on.

use colored::Colorize;
use std::fmt;

/// A verbosity-gated diagnostic sink.
pub trait Logger {
    /// Whether diagnostics are emitted at all.
    fn is_verbose(&self) -> bool;

    /// Writes one line unconditionally. Callers normally use [`Logger::log`].
    fn write_line(&self, line: &str);

    fn log(&self, message: &str) {
        if self.is_verbose() {
            self.write_line(message);
        }
    }

    fn logf(&self, args: fmt::Arguments<'_>) {
        if self.is_verbose() {
            self.write_line(&args.to_string());
        }
    }
}

/// Logs a formatted message through a [`Logger`].
///
/// ```rust
/// use ds3cli::logging::{Logger, StderrLogger};
///
/// let logger = StderrLogger::new(false);
/// ds3cli::logf!(logger, "rendered {} bytes", 42);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.logf(format_args!($($arg)*))
    };
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StderrLogger {
    verbose: bool,
}

impl StderrLogger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Logger for StderrLogger {
    fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn write_line(&self, line: &str) {
        eprintln!("{}", line.dimmed());
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub use memory::MemoryLogger;

#[cfg(any(test, feature = "test_utils"))]
mod memory {
    use super::Logger;
    use std::cell::RefCell;

    /// Records every emitted line; nothing is printed.
    #[derive(Debug, Default)]
    pub struct MemoryLogger {
        verbose: bool,
        lines: RefCell<Vec<String>>,
    }

    impl MemoryLogger {
        pub fn new(verbose: bool) -> Self {
            Self {
                verbose,
                lines: RefCell::new(Vec::new()),
            }
        }

        pub fn lines(&self) -> Vec<String> {
            self.lines.borrow().clone()
        }
    }

    impl Logger for MemoryLogger {
        fn is_verbose(&self) -> bool {
            self.verbose
        }

        fn write_line(&self, line: &str) {
            self.lines.borrow_mut().push(line.to_string());
        }
    }
}
