//! Sample backend payloads shared by unit tests.

use crate::model::{
    BucketDetails, BuildInformation, Contents, Job, JobList, JobRequestType, JobStatus,
    ListAllMyBucketsResult, Owner, StorageDomain, SystemInformation, Tape, TapeList, TapeState,
};
use crate::serializer::Timestamp;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

pub fn fixed_instant() -> Timestamp {
    Timestamp::new(
        Utc.with_ymd_and_hms(2016, 2, 1, 10, 30, 0).unwrap() + chrono::Duration::milliseconds(125),
    )
}

pub fn sample_tape(bar_code: &str) -> Tape {
    Tape {
        id: Uuid::new_v4(),
        bar_code: Some(bar_code.to_string()),
        state: TapeState::Normal,
        tape_type: "LTO6".to_string(),
        partition_id: Some(Uuid::new_v4()),
        storage_domain_id: None,
        available_raw_capacity: Some(2_408_088_338_432),
        total_raw_capacity: Some(2_408_088_338_432),
        assigned_to_storage_domain: false,
        write_protected: false,
        full_of_data: false,
        last_accessed: None,
        last_modified: Some(fixed_instant()),
        last_verified: None,
    }
}

pub fn sample_tape_list() -> TapeList {
    TapeList {
        tapes: vec![sample_tape("121552L6"), sample_tape("121553L6")],
    }
}

pub fn sample_owner() -> Owner {
    Owner {
        id: "d6cc3b3b-3ae1-4ffa-a4c4-1c4d2d0b1b8c".to_string(),
        display_name: "jason".to_string(),
    }
}

pub fn sample_contents(key: &str, size: u64) -> Contents {
    Contents {
        key: key.to_string(),
        size,
        e_tag: Some("a1b2c3".to_string()),
        last_modified: Some(fixed_instant()),
        owner: Some(sample_owner()),
        storage_class: None,
    }
}

pub fn sample_service_listing() -> ListAllMyBucketsResult {
    ListAllMyBucketsResult {
        owner: Some(sample_owner()),
        buckets: vec![
            BucketDetails {
                name: "books".to_string(),
                creation_date: Some(fixed_instant()),
            },
            BucketDetails {
                name: "archive".to_string(),
                creation_date: None,
            },
        ],
    }
}

pub fn sample_system_information() -> SystemInformation {
    SystemInformation {
        api_version: "518B6F2C8D4C4A3E".to_string(),
        build_information: BuildInformation {
            branch: "//BlackPearl/3.2".to_string(),
            revision: "152997".to_string(),
            version: "3.2.0".to_string(),
        },
        serial_number: "UNKNOWN".to_string(),
        instance_id: Uuid::nil(),
        now: fixed_instant(),
    }
}

pub fn sample_storage_domain(name: &str) -> StorageDomain {
    StorageDomain {
        id: Uuid::new_v4(),
        name: name.to_string(),
        write_optimization: Some("CAPACITY".to_string()),
        media_ejection_allowed: true,
        secure_media_allocation: false,
    }
}

pub fn sample_job_list() -> JobList {
    JobList {
        jobs: vec![Job {
            job_id: Uuid::new_v4(),
            bucket_name: "books".to_string(),
            name: Some("PUT by 10.1.1.1".to_string()),
            request_type: JobRequestType::Put,
            status: JobStatus::InProgress,
            priority: Some("NORMAL".to_string()),
            start_date: Some(fixed_instant()),
            original_size_in_bytes: 1024,
            completed_size_in_bytes: 512,
            user_name: Some("jason".to_string()),
        }],
    }
}
