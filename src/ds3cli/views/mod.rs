//! # Views
//!
//! A view projects one [`CmdResult`] variant into an [`Envelope`](crate::envelope::Envelope)
//! and serializes it with [`to_canonical_text`](crate::serializer::to_canonical_text).
//!
//! ## Dispatch
//!
//! [`render`] is a single exhaustive `match` over [`CmdResult`]. There is no
//! registry and no fallback arm: a new result variant is a compile error here
//! until it gets its view.
//!
//! ## Empty results
//!
//! Listing views distinguish "nothing to show" from "here is the payload":
//!
//! | View                | Empty case                                        |
//! |---------------------|---------------------------------------------------|
//! | `tapes`             | message, no data                                  |
//! | `bucket`            | message naming the bucket, no data                |
//! | `service`           | message, no data                                  |
//! | `storage_domains`   | message, no data                                  |
//! | `put_bulk`          | status message when nothing was ignored           |
//! | `config`            | settings always rendered, message only on change  |
//! | everything else     | payload always rendered                           |
//!
//! Nothing is truncated or paginated here; whatever the command fetched is rendered.
//!
//! ## Errors
//!
//! Serialization failures propagate unchanged. [`render_error`] turns any
//! [`Ds3Error`] into the ERROR envelope.

use crate::error::{Ds3Error, Result};
use crate::logging::Logger;
use crate::result::CmdResult;

pub mod bucket;
pub mod command_error;
pub mod config;
pub mod head_object;
pub mod jobs;
pub mod put_bulk;
pub mod service;
pub mod status;
pub mod storage_domains;
pub mod system_information;
pub mod tapes;

pub fn render(result: CmdResult, logger: &dyn Logger) -> Result<String> {
    crate::logf!(logger, "Rendering {} result", result.kind());

    let text = match result {
        CmdResult::Tapes(result) => tapes::render(result),
        CmdResult::Bucket(result) => bucket::render(result),
        CmdResult::Service(result) => service::render(result),
        CmdResult::HeadObject(result) => head_object::render(result),
        CmdResult::SystemInformation(result) => system_information::render(result),
        CmdResult::StorageDomains(result) => storage_domains::render(result),
        CmdResult::Jobs(result) => jobs::render(result),
        CmdResult::PutBulk(result) => put_bulk::render(result),
        CmdResult::Config(result) => config::render(result),
        CmdResult::Status(result) => status::render(result),
    }?;

    crate::logf!(logger, "Rendered {} bytes", text.len());
    Ok(text)
}

pub fn render_error(error: &Ds3Error) -> Result<String> {
    command_error::render(error)
}
