use crate::envelope::Envelope;
use crate::error::Result;
use crate::result::BucketResult;
use crate::serializer::to_canonical_text;

pub fn render(result: BucketResult) -> Result<String> {
    if result.objects.is_empty() {
        let message = format!(
            "No objects were reported in the bucket '{}'",
            result.bucket_name
        );
        return to_canonical_text(&Envelope::ok().with_message(message));
    }

    to_canonical_text(&Envelope::ok().with_data(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_contents;
    use serde_json::Value;

    #[test]
    fn empty_bucket_names_the_bucket() {
        let text = render(BucketResult::new("books", Vec::new())).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["status"], "OK");
        assert_eq!(
            json["message"],
            "No objects were reported in the bucket 'books'"
        );
        assert!(json.get("data").is_none());
    }

    #[test]
    fn objects_are_rendered_in_order() {
        let result = BucketResult::new(
            "books",
            vec![sample_contents("b.txt", 2), sample_contents("a.txt", 1)],
        );
        let text = render(result).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();

        assert!(json.get("message").is_none());
        assert_eq!(json["data"]["BucketName"], "books");
        let keys: Vec<_> = json["data"]["Objects"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["Key"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["b.txt", "a.txt"]);
    }
}
