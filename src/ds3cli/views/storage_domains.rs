use crate::envelope::Envelope;
use crate::error::Result;
use crate::result::StorageDomainsResult;
use crate::serializer::to_canonical_text;

pub const NO_STORAGE_DOMAINS_MESSAGE: &str = "No Storage Domains returned";

pub fn render(result: StorageDomainsResult) -> Result<String> {
    if result.domains.storage_domains.is_empty() {
        return to_canonical_text(&Envelope::ok().with_message(NO_STORAGE_DOMAINS_MESSAGE));
    }
    to_canonical_text(&Envelope::ok().with_data(result.domains))
}
