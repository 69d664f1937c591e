//! # Command Results
//!
//! A [`CmdResult`] is what one successful backend command produced. The set of
//! variants is closed: the renderer dispatch in [`crate::views`] matches on it
//! exhaustively, so adding a variant without a renderer does not compile.
//!
//! Results hold data only. They are built right after the backend call,
//! never mutated, and consumed by exactly one render.

use crate::config::Ds3Config;
use crate::model::{
    Contents, IgnoredFile, JobList, ListAllMyBucketsResult, ObjectMetadata, ObjectStatus,
    StorageDomainList, SystemInformation, TapeList,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct TapesResult {
    pub tapes: Option<TapeList>,
}

impl TapesResult {
    pub fn new(tapes: Option<TapeList>) -> Self {
        Self { tapes }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BucketResult {
    pub bucket_name: String,
    pub objects: Vec<Contents>,
}

impl BucketResult {
    pub fn new(bucket_name: impl Into<String>, objects: Vec<Contents>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            objects,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResult {
    pub listing: Option<ListAllMyBucketsResult>,
}

impl ServiceResult {
    pub fn new(listing: Option<ListAllMyBucketsResult>) -> Self {
        Self { listing }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadObjectResult {
    pub metadata: ObjectMetadata,
    pub status: ObjectStatus,
}

impl HeadObjectResult {
    pub fn new(metadata: ObjectMetadata, status: ObjectStatus) -> Self {
        Self { metadata, status }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemInformationResult {
    pub information: SystemInformation,
}

impl SystemInformationResult {
    pub fn new(information: SystemInformation) -> Self {
        Self { information }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorageDomainsResult {
    pub domains: StorageDomainList,
}

impl StorageDomainsResult {
    pub fn new(domains: StorageDomainList) -> Self {
        Self { domains }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobsResult {
    pub jobs: JobList,
}

impl JobsResult {
    pub fn new(jobs: JobList) -> Self {
        Self { jobs }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PutBulkResult {
    pub status_message: String,
    #[serde(default)]
    pub ignored_files: Vec<IgnoredFile>,
}

impl PutBulkResult {
    pub fn new(status_message: impl Into<String>) -> Self {
        Self {
            status_message: status_message.into(),
            ignored_files: Vec::new(),
        }
    }

    pub fn with_ignored_files(mut self, ignored_files: Vec<IgnoredFile>) -> Self {
        self.ignored_files = ignored_files;
        self
    }
}

/// The stored configuration, with a note when a setting was just changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigResult {
    pub config: Ds3Config,
    pub message: Option<String>,
}

impl ConfigResult {
    pub fn new(config: Ds3Config) -> Self {
        Self {
            config,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Commands whose only outcome is a confirmation line.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusResult {
    pub message: String,
}

impl StatusResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CmdResult {
    Tapes(TapesResult),
    Bucket(BucketResult),
    Service(ServiceResult),
    HeadObject(HeadObjectResult),
    SystemInformation(SystemInformationResult),
    StorageDomains(StorageDomainsResult),
    Jobs(JobsResult),
    PutBulk(PutBulkResult),
    Config(ConfigResult),
    Status(StatusResult),
}

impl CmdResult {
    /// Stable name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CmdResult::Tapes(_) => "get_tapes",
            CmdResult::Bucket(_) => "get_bucket",
            CmdResult::Service(_) => "get_service",
            CmdResult::HeadObject(_) => "head_object",
            CmdResult::SystemInformation(_) => "system_information",
            CmdResult::StorageDomains(_) => "get_storage_domains",
            CmdResult::Jobs(_) => "get_jobs",
            CmdResult::PutBulk(_) => "put_bulk",
            CmdResult::Config(_) => "config",
            CmdResult::Status(_) => "status",
        }
    }
}

macro_rules! impl_from_result {
    ($($variant:ident => $result:ty),* $(,)?) => {
        $(
            impl From<$result> for CmdResult {
                fn from(result: $result) -> Self {
                    CmdResult::$variant(result)
                }
            }
        )*
    };
}

impl_from_result! {
    Tapes => TapesResult,
    Bucket => BucketResult,
    Service => ServiceResult,
    HeadObject => HeadObjectResult,
    SystemInformation => SystemInformationResult,
    StorageDomains => StorageDomainsResult,
    Jobs => JobsResult,
    PutBulk => PutBulkResult,
    Config => ConfigResult,
    Status => StatusResult,
}
