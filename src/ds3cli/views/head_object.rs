//! HEAD object view.
//!
//! The object's storage status is a sibling of its metadata map, never an
//! entry inside it, so a user metadata key called `Status` cannot collide.

use crate::envelope::Envelope;
use crate::error::Result;
use crate::model::{ObjectMetadata, ObjectStatus};
use crate::result::HeadObjectResult;
use crate::serializer::to_canonical_text;
use serde::Serialize;

#[derive(Serialize)]
struct HeaderModel {
    #[serde(rename = "Metadata")]
    metadata: ObjectMetadata,
    #[serde(rename = "Status")]
    status: ObjectStatus,
}

pub fn render(result: HeadObjectResult) -> Result<String> {
    let model = HeaderModel {
        metadata: result.metadata,
        status: result.status,
    };
    to_canonical_text(&Envelope::ok().with_data(model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn metadata_and_status_are_siblings() {
        let mut metadata = ObjectMetadata::new();
        metadata.insert("owner".into(), vec!["jason".into()]);
        metadata.insert("Status".into(), vec!["user-defined".into()]);
        metadata.insert("tags".into(), vec!["a".into(), "b".into()]);

        let text = render(HeadObjectResult::new(metadata, ObjectStatus::OnTape)).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["status"], "OK");
        assert_eq!(json["data"]["Status"], "ON_TAPE");
        assert_eq!(
            json["data"]["Metadata"],
            json!({
                "Status": ["user-defined"],
                "owner": ["jason"],
                "tags": ["a", "b"],
            })
        );
    }

    #[test]
    fn metadata_keeps_reported_order() {
        let mut metadata = ObjectMetadata::new();
        metadata.insert("zeta".into(), vec!["1".into()]);
        metadata.insert("alpha".into(), vec!["2".into()]);

        let text = render(HeadObjectResult::new(metadata, ObjectStatus::OnTape)).unwrap();
        assert!(text.find("\"zeta\"").unwrap() < text.find("\"alpha\"").unwrap());
    }

    #[test]
    fn empty_metadata_still_has_both_fields() {
        let text = render(HeadObjectResult::new(
            ObjectMetadata::new(),
            ObjectStatus::InProgress,
        ))
        .unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["data"]["Metadata"], json!({}));
        assert_eq!(json["data"]["Status"], "IN_PROGRESS");
    }
}
