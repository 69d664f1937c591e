//! Payload types reported by BlackPearl.
//!
//! These mirror the backend's own naming (PascalCase keys) and are rendered
//! verbatim inside the envelope's `data` field.

use crate::serializer::Timestamp;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TapeState {
    Normal,
    Offline,
    OnlinePending,
    OnlineInProgress,
    PendingInspection,
    DataCheckpointFailure,
    DataCheckpointMissing,
    Foreign,
    ImportPending,
    ImportInProgress,
    LostFromPartition,
    EjectToEePending,
    Ejected,
    BarCodeMissing,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tape {
    pub id: Uuid,
    #[serde(default)]
    pub bar_code: Option<String>,
    pub state: TapeState,
    #[serde(rename = "Type")]
    pub tape_type: String,
    #[serde(default)]
    pub partition_id: Option<Uuid>,
    #[serde(default)]
    pub storage_domain_id: Option<Uuid>,
    #[serde(default)]
    pub available_raw_capacity: Option<u64>,
    #[serde(default)]
    pub total_raw_capacity: Option<u64>,
    #[serde(default)]
    pub assigned_to_storage_domain: bool,
    #[serde(default)]
    pub write_protected: bool,
    #[serde(default)]
    pub full_of_data: bool,
    #[serde(default)]
    pub last_accessed: Option<Timestamp>,
    #[serde(default)]
    pub last_modified: Option<Timestamp>,
    #[serde(default)]
    pub last_verified: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TapeList {
    #[serde(default)]
    pub tapes: Vec<Tape>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Owner {
    pub id: String,
    pub display_name: String,
}

/// One object entry of a bucket listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contents {
    pub key: String,
    pub size: u64,
    #[serde(default)]
    pub e_tag: Option<String>,
    #[serde(default)]
    pub last_modified: Option<Timestamp>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub storage_class: Option<String>,
}

/// Response of a bucket listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBucketResult {
    pub name: String,
    #[serde(default)]
    pub contents: Vec<Contents>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BucketDetails {
    pub name: String,
    #[serde(default)]
    pub creation_date: Option<Timestamp>,
}

/// Response of a service (bucket account) listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAllMyBucketsResult {
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub buckets: Vec<BucketDetails>,
}

/// Where an object currently lives, as reported by a HEAD request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectStatus {
    NearLine,
    OnTape,
    InProgress,
    DoesntExist,
    #[serde(other)]
    Unknown,
}

/// User metadata attached to an object, in the order the backend reported it.
/// A key may carry several values.
pub type ObjectMetadata = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HeadObjectResponse {
    #[serde(default)]
    pub metadata: ObjectMetadata,
    pub status: ObjectStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildInformation {
    pub branch: String,
    pub revision: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemInformation {
    pub api_version: String,
    pub build_information: BuildInformation,
    pub serial_number: String,
    pub instance_id: Uuid,
    pub now: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StorageDomain {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub write_optimization: Option<String>,
    #[serde(default)]
    pub media_ejection_allowed: bool,
    #[serde(default)]
    pub secure_media_allocation: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StorageDomainList {
    #[serde(default)]
    pub storage_domains: Vec<StorageDomain>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobRequestType {
    Put,
    Get,
    Verify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    InProgress,
    Completed,
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Job {
    pub job_id: Uuid,
    pub bucket_name: String,
    #[serde(default)]
    pub name: Option<String>,
    pub request_type: JobRequestType,
    pub status: JobStatus,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub start_date: Option<Timestamp>,
    #[serde(default)]
    pub original_size_in_bytes: u64,
    #[serde(default)]
    pub completed_size_in_bytes: u64,
    #[serde(default)]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobList {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// A local file skipped by a bulk put, with the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgnoredFile {
    pub path: String,
    pub error_message: String,
}

/// Error document BlackPearl returns for a failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackendError {
    pub code: String,
    pub http_error_code: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tape_reads_backend_document() {
        let json = r#"{
            "Id": "5f6e0a4c-4c2e-4b5e-9a59-3d1f9ab8b1c2",
            "BarCode": "121552L6",
            "State": "NORMAL",
            "Type": "LTO6",
            "LastModified": "2016-02-01T10:00:00.000Z"
        }"#;
        let tape: Tape = serde_json::from_str(json).unwrap();
        assert_eq!(tape.bar_code.as_deref(), Some("121552L6"));
        assert_eq!(tape.state, TapeState::Normal);
        assert!(tape.last_modified.is_some());
        assert!(tape.last_accessed.is_none());
        assert!(!tape.write_protected);
    }

    #[test]
    fn unrecognised_states_become_unknown() {
        let state: TapeState = serde_json::from_str(r#""CLEANING""#).unwrap();
        assert_eq!(state, TapeState::Unknown);

        let status: ObjectStatus = serde_json::from_str(r#""SOMEWHERE""#).unwrap();
        assert_eq!(status, ObjectStatus::Unknown);
    }

    #[test]
    fn object_status_uses_backend_spelling() {
        assert_eq!(
            serde_json::to_string(&ObjectStatus::NearLine).unwrap(),
            r#""NEAR_LINE""#
        );
        assert_eq!(
            serde_json::to_string(&ObjectStatus::DoesntExist).unwrap(),
            r#""DOESNT_EXIST""#
        );
    }

    #[test]
    fn backend_error_document() {
        let json = r#"{"Code":"NotFound","HttpErrorCode":404,"Message":"bucket missing"}"#;
        let err: BackendError = serde_json::from_str(json).unwrap();
        assert_eq!(err.http_error_code, 404);
    }
}
