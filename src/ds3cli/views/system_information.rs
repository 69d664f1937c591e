use crate::envelope::Envelope;
use crate::error::Result;
use crate::result::SystemInformationResult;
use crate::serializer::to_canonical_text;

pub fn render(result: SystemInformationResult) -> Result<String> {
    to_canonical_text(&Envelope::ok().with_data(result.information))
}
