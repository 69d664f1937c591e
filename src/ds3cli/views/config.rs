use crate::envelope::Envelope;
use crate::error::Result;
use crate::result::ConfigResult;
use crate::serializer::to_canonical_text;

pub fn render(result: ConfigResult) -> Result<String> {
    let envelope = match result.message {
        Some(message) => Envelope::ok().with_message(message),
        None => Envelope::ok(),
    };
    to_canonical_text(&envelope.with_data(result.config))
}
