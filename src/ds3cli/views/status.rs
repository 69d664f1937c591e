use crate::envelope::Envelope;
use crate::error::Result;
use crate::result::StatusResult;
use crate::serializer::to_canonical_text;

pub fn render(result: StatusResult) -> Result<String> {
    to_canonical_text(&Envelope::ok().with_message(result.message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_only() {
        let text = render(StatusResult::new("Success: Deleted bucket 'books'")).unwrap();
        assert_eq!(
            text,
            "{\n  \"status\": \"OK\",\n  \"message\": \"Success: Deleted bucket 'books'\"\n}"
        );
    }
}
