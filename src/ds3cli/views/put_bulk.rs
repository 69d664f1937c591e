use crate::envelope::Envelope;
use crate::error::Result;
use crate::result::PutBulkResult;
use crate::serializer::to_canonical_text;

pub fn render(result: PutBulkResult) -> Result<String> {
    if result.ignored_files.is_empty() {
        return to_canonical_text(&Envelope::ok().with_message(result.status_message));
    }
    to_canonical_text(&Envelope::ok().with_data(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IgnoredFile;
    use serde_json::{json, Value};

    #[test]
    fn clean_put_reports_status_message() {
        let text = render(PutBulkResult::new("SUCCESS: Wrote all the files")).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["message"], "SUCCESS: Wrote all the files");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn ignored_files_are_data() {
        let result = PutBulkResult::new("WARN: Not all of the files were processed")
            .with_ignored_files(vec![IgnoredFile {
                path: "/tmp/locked".into(),
                error_message: "Permission denied".into(),
            }]);
        let text = render(result).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(
            json["data"],
            json!({
                "status_message": "WARN: Not all of the files were processed",
                "ignored_files": [{ "path": "/tmp/locked", "error_message": "Permission denied" }],
            })
        );
    }
}
