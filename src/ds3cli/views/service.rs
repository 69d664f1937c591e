use crate::envelope::Envelope;
use crate::error::Result;
use crate::result::ServiceResult;
use crate::serializer::to_canonical_text;

pub const NO_BUCKETS_MESSAGE: &str = "You do not have any buckets";

pub fn render(result: ServiceResult) -> Result<String> {
    match result.listing {
        Some(listing) if !listing.buckets.is_empty() => {
            to_canonical_text(&Envelope::ok().with_data(listing))
        }
        _ => to_canonical_text(&Envelope::ok().with_message(NO_BUCKETS_MESSAGE)),
    }
}
