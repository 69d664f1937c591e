//! # ds3cli Architecture
//!
//! ds3cli is the **result-rendering core** of a BlackPearl command-line client.
//! Commands run against the storage service elsewhere; what reaches this crate is
//! a typed result, and what leaves it is one stable, machine-parseable JSON text.
//!
//! ## The Render Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, reads captured backend responses       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  CmdResult / Ds3Error
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Views (views/*.rs)                                         │
//! │  - Exhaustive dispatch: one view per CmdResult variant      │
//! │  - Empty-listing policy, error envelopes                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Envelope<T>
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Serializer (serializer.rs)                                 │
//! │  - Pretty JSON, `\n` line endings, fixed UTC timestamps     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O in the Core
//!
//! From `views` inward (views, envelope, serializer, failure aggregation), code:
//! - Takes regular Rust values and returns `Result<String>` or plain data
//! - **Never** writes to stdout/stderr (diagnostics go through an injected [`logging::Logger`])
//! - **Never** calls `std::process::exit`
//!
//! Mapping an envelope's status to an exit code is the CLI's job.
//!
//! ## Errors Are Data
//!
//! Batch tape failures are not an exception hierarchy: [`failure::aggregate`]
//! builds an [`failure::AggregatedFailure`] holding the ordered items, and its
//! message is derived by a pure function. [`views::render_error`] turns any
//! [`error::Ds3Error`] into the ERROR envelope.
//!
//! ## Testing Strategy
//!
//! 1. **Views** (`views/*.rs`): given a result, assert on the parsed envelope.
//!    This is where most tests live.
//! 2. **Serializer / failure**: exact-text tests (timestamps, line endings, the
//!    tape failure message).
//! 3. **CLI** (`tests/`): run the binary on captured responses and check
//!    stdout and the exit code.
//!
//! ## Module Overview
//!
//! - [`result`]: `CmdResult`, the closed set of command results
//! - [`model`]: backend payload types
//! - [`views`]: renderers and their dispatch
//! - [`envelope`]: the `{status, message, data}` wrapper
//! - [`serializer`]: canonical JSON text and timestamp format
//! - [`failure`]: tape failure aggregation
//! - [`logging`]: verbosity-gated diagnostics
//! - [`config`]: configuration file
//! - [`error`]: error types

pub mod config;
pub mod envelope;
pub mod error;
pub mod failure;
pub mod logging;
pub mod model;
pub mod result;
pub mod serializer;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod views;
