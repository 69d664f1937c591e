//! Command handlers.
//!
//! Each handler reads one captured backend response, checks it for a backend
//! error document, and builds the matching [`CmdResult`]. Handlers never print.

use super::args::{Commands, InputArgs};
use super::AppContext;
use ds3cli::config::Ds3Config;
use ds3cli::error::{Ds3Error, Result};
use ds3cli::failure::{check_tape_failures, TapeFailureItem};
use ds3cli::logf;
use ds3cli::logging::Logger;
use ds3cli::model::{
    BackendError, HeadObjectResponse, JobList, ListAllMyBucketsResult, ListBucketResult,
    StorageDomainList, SystemInformation, TapeList,
};
use ds3cli::result::{
    BucketResult, CmdResult, ConfigResult, HeadObjectResult, JobsResult, PutBulkResult, ServiceResult,
    StatusResult, StorageDomainsResult, SystemInformationResult, TapesResult,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use uuid::Uuid;

pub fn execute(ctx: &AppContext, command: &Commands) -> Result<CmdResult> {
    logf!(ctx.logger, "Running {}", command.name());

    match command {
        Commands::GetTapes(input) => {
            let tapes: Option<TapeList> = load_response(ctx, input)?;
            Ok(TapesResult::new(tapes).into())
        }
        Commands::GetBucket(input) => {
            let listing: ListBucketResult = load_response(ctx, input)?;
            Ok(BucketResult::new(listing.name, listing.contents).into())
        }
        Commands::GetService(input) => {
            let listing: Option<ListAllMyBucketsResult> = load_response(ctx, input)?;
            Ok(ServiceResult::new(listing).into())
        }
        Commands::HeadObject(input) => {
            let head: HeadObjectResponse = load_response(ctx, input)?;
            Ok(HeadObjectResult::new(head.metadata, head.status).into())
        }
        Commands::SystemInformation(input) => {
            let information: SystemInformation = load_response(ctx, input)?;
            Ok(SystemInformationResult::new(information).into())
        }
        Commands::GetStorageDomains(input) => {
            let domains: StorageDomainList = load_response(ctx, input)?;
            Ok(StorageDomainsResult::new(domains).into())
        }
        Commands::GetJobs(input) => {
            let jobs: JobList = load_response(ctx, input)?;
            Ok(JobsResult::new(jobs).into())
        }
        Commands::PutBulk(input) => {
            let report: PutBulkResult = load_response(ctx, input)?;
            Ok(report.into())
        }
        Commands::DeleteTape { id, failures } => delete_tape(ctx, *id, failures.as_deref()),
        Commands::Config { key, value } => config(ctx, key.as_deref(), value.as_deref()),
    }
}

/// Works on the stored file, not the flag-merged settings, so `--force` on
/// this invocation is never persisted by accident.
fn config(ctx: &AppContext, key: Option<&str>, value: Option<&str>) -> Result<CmdResult> {
    let mut config = Ds3Config::load(&ctx.config_dir)?;

    match (key, value) {
        (None, _) => Ok(ConfigResult::new(config).into()),
        (Some(key), None) => match config.get(key) {
            Some(current) => Ok(StatusResult::new(format!("{} = {}", key, current)).into()),
            None => Err(Ds3Error::Config(format!("Unknown config key: {}", key))),
        },
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save(&ctx.config_dir)?;
            logf!(ctx.logger, "Saved config to {}", ctx.config_dir.display());
            let message = format!("{} set to {}", key, value);
            Ok(ConfigResult::new(config).with_message(message).into())
        }
    }
}

fn delete_tape(ctx: &AppContext, id: Uuid, failures: Option<&Path>) -> Result<CmdResult> {
    let items: Vec<TapeFailureItem> = match failures {
        Some(path) => parse_response(&read_input(path)?)?,
        None => Vec::new(),
    };
    logf!(ctx.logger, "Checking {} reported tape failure(s)", items.len());
    check_tape_failures(items, ctx.config.force, &ctx.logger)?;

    Ok(StatusResult::new(format!("Success: Deleted tape {}", id)).into())
}

fn load_response<T: DeserializeOwned>(ctx: &AppContext, input: &InputArgs) -> Result<T> {
    let text = read_input(&input.input)?;
    logf!(
        ctx.logger,
        "Read {} bytes from {}",
        text.len(),
        input.input.display()
    );
    parse_response(&text)
}

/// Reads a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .map_err(|e| Ds3Error::InvalidInput(format!("{}: {}", path.display(), e)))
}

/// Parses a captured response. A backend error document becomes
/// [`Ds3Error::FailedRequest`] whatever payload was expected.
fn parse_response<T: DeserializeOwned>(text: &str) -> Result<T> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| Ds3Error::InvalidInput(e.to_string()))?;

    if value.get("HttpErrorCode").is_some() {
        if let Ok(error) = serde_json::from_value::<BackendError>(value.clone()) {
            return Err(Ds3Error::FailedRequest {
                status_code: error.http_error_code,
                response: error.message,
            });
        }
    }

    serde_json::from_value(value).map_err(|e| Ds3Error::InvalidInput(e.to_string()))
}
