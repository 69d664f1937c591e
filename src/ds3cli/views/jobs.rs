use crate::envelope::Envelope;
use crate::error::Result;
use crate::result::JobsResult;
use crate::serializer::to_canonical_text;

pub fn render(result: JobsResult) -> Result<String> {
    to_canonical_text(&Envelope::ok().with_data(result.jobs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobList;
    use crate::test_utils::sample_job_list;
    use serde_json::{json, Value};

    #[test]
    fn jobs_are_rendered() {
        let text = render(JobsResult::new(sample_job_list())).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();
        let job = &json["data"]["Jobs"][0];
        assert_eq!(job["RequestType"], "PUT");
        assert_eq!(job["Status"], "IN_PROGRESS");
        assert_eq!(job["StartDate"], "2016-02-01T10:30:00.125Z");
    }

    #[test]
    fn no_jobs_is_still_data() {
        let text = render(JobsResult::new(JobList::default())).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["data"], json!({ "Jobs": [] }));
        assert!(json.get("message").is_none());
    }
}
