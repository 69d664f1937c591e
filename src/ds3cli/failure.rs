//! # Tape Failure Aggregation
//!
//! Batch tape operations are atomic from the user's point of view: either the
//! backend reports no failures, or the whole batch is reported as a single
//! terminal error. [`aggregate`] turns the backend's ordered failure list into an
//! [`AggregatedFailure`], whose [`message`](AggregatedFailure::message) is the
//! text users see and scripts scan:
//!
//! ```text
//! There are tape failures in BlackPearl:
//! Tape ID: T1, Error Message: jammed
//! Tape ID: T2, Error Message: offline
//! To ignore this error use --force
//! ```
//!
//! The layout of that message, including the closing `--force` line, is a
//! compatibility contract.

use crate::error::{Ds3Error, Result};
use crate::logging::Logger;
use serde::{Deserialize, Serialize};
use std::fmt;

const HEADER: &str = "There are tape failures in BlackPearl:\n";
const FOOTER: &str = "To ignore this error use --force";

/// One failure reported by the backend for a single tape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TapeFailureItem {
    pub tape_id: String,
    pub error_message: String,
}

impl TapeFailureItem {
    pub fn new(tape_id: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            tape_id: tape_id.into(),
            error_message: error_message.into(),
        }
    }
}

/// A non-empty, ordered set of tape failures reported as one error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedFailure {
    items: Vec<TapeFailureItem>,
}

impl AggregatedFailure {
    /// Items in backend report order.
    pub fn items(&self) -> &[TapeFailureItem] {
        &self.items
    }

    pub fn message(&self) -> String {
        let mut message = String::from(HEADER);
        for item in &self.items {
            message.push_str(&format!(
                "Tape ID: {}, Error Message: {}\n",
                item.tape_id, item.error_message
            ));
        }
        message.push_str(FOOTER);
        message
    }
}

impl fmt::Display for AggregatedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

pub fn aggregate(items: Vec<TapeFailureItem>) -> Result<AggregatedFailure> {
    if items.is_empty() {
        return Err(Ds3Error::EmptyFailureSet);
    }
    Ok(AggregatedFailure { items })
}

/// Pre-flight check run before a batch tape operation.
///
/// No failures passes. Failures with `force` set are logged and ignored;
/// otherwise they are returned as [`Ds3Error::TapeFailures`].
pub fn check_tape_failures(
    items: Vec<TapeFailureItem>,
    force: bool,
    logger: &dyn Logger,
) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }

    let failure = aggregate(items)?;
    if force {
        crate::logf!(
            logger,
            "Ignoring {} tape failure(s) because --force was given",
            failure.items().len()
        );
        logger.log(&failure.message());
        return Ok(());
    }

    Err(Ds3Error::TapeFailures(failure))
}
