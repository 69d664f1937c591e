use crate::envelope::Envelope;
use crate::error::Result;
use crate::result::TapesResult;
use crate::serializer::to_canonical_text;

pub const NO_TAPES_MESSAGE: &str = "You do not have any tapes";

pub fn render(result: TapesResult) -> Result<String> {
    match result.tapes {
        Some(list) if !list.tapes.is_empty() => to_canonical_text(&Envelope::ok().with_data(list)),
        _ => to_canonical_text(&Envelope::ok().with_message(NO_TAPES_MESSAGE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TapeList;
    use crate::test_utils::{fixed_instant, sample_tape_list};
    use serde_json::Value;

    #[test]
    fn missing_listing_gets_message() {
        let text = render(TapesResult::new(None)).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["status"], "OK");
        assert_eq!(json["message"], NO_TAPES_MESSAGE);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn empty_listing_gets_message() {
        let text = render(TapesResult::new(Some(TapeList::default()))).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["message"], NO_TAPES_MESSAGE);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn listing_is_rendered_whole() {
        let list = sample_tape_list();
        let text = render(TapesResult::new(Some(list.clone()))).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["status"], "OK");
        assert!(json.get("message").is_none());
        assert_eq!(json["data"], serde_json::to_value(&list).unwrap());

        let tapes = json["data"]["Tapes"].as_array().unwrap();
        assert_eq!(tapes.len(), 2);
        assert_eq!(tapes[0]["BarCode"], "121552L6");
        assert_eq!(
            tapes[0]["LastModified"],
            fixed_instant().to_string().as_str()
        );
    }

    #[test]
    fn tape_fields_keep_declaration_order() {
        let text = render(TapesResult::new(Some(sample_tape_list()))).unwrap();
        let id = text.find("\"Id\"").unwrap();
        let bar_code = text.find("\"BarCode\"").unwrap();
        let state = text.find("\"State\"").unwrap();
        assert!(id < bar_code && bar_code < state);
    }
}
