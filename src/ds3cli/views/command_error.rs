//! ERROR envelope for a failed command.
//!
//! `message` is always the error's display text. Some errors also carry
//! details in `data`:
//!
//! - tape failures: the failure items, in report order
//! - failed requests: `StatusCode` and `ApiErrorMessage`

use crate::envelope::Envelope;
use crate::error::{Ds3Error, Result};
use crate::serializer::to_canonical_text;
use std::collections::BTreeMap;

pub fn render(error: &Ds3Error) -> Result<String> {
    let envelope = Envelope::error().with_message(error.to_string());

    match error {
        Ds3Error::TapeFailures(failure) => to_canonical_text(&envelope.with_data(failure.items())),
        Ds3Error::FailedRequest {
            status_code,
            response,
        } => {
            let mut details = BTreeMap::new();
            details.insert("StatusCode", status_code.to_string());
            details.insert("ApiErrorMessage", response.clone());
            to_canonical_text(&envelope.with_data(details))
        }
        _ => to_canonical_text(&envelope),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::{aggregate, TapeFailureItem};
    use serde_json::{json, Value};

    #[test]
    fn tape_failures_keep_message_and_items() {
        let failure = aggregate(vec![
            TapeFailureItem::new("T1", "jammed"),
            TapeFailureItem::new("T2", "offline"),
        ])
        .unwrap();
        let text = render(&Ds3Error::TapeFailures(failure)).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["status"], "ERROR");
        assert_eq!(
            json["message"],
            "There are tape failures in BlackPearl:\nTape ID: T1, Error Message: jammed\nTape ID: T2, Error Message: offline\nTo ignore this error use --force"
        );
        assert_eq!(
            json["data"],
            json!([
                { "tapeId": "T1", "errorMessage": "jammed" },
                { "tapeId": "T2", "errorMessage": "offline" },
            ])
        );
    }

    #[test]
    fn failed_request_details() {
        let error = Ds3Error::FailedRequest {
            status_code: 404,
            response: "The bucket does not exist".into(),
        };
        let text = render(&error).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["status"], "ERROR");
        assert_eq!(
            json["message"],
            "Request failed with status code 404: The bucket does not exist"
        );
        assert_eq!(
            json["data"],
            json!({ "ApiErrorMessage": "The bucket does not exist", "StatusCode": "404" })
        );
        assert!(text.find("ApiErrorMessage").unwrap() < text.find("StatusCode").unwrap());
    }

    #[test]
    fn plain_errors_have_no_data() {
        let text = render(&Ds3Error::EmptyFailureSet).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["status"], "ERROR");
        assert_eq!(json["message"], "Cannot aggregate an empty set of failures");
        assert!(json.get("data").is_none());
    }
}
