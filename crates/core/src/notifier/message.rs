use lettre::message::{header::ContentType, Mailbox};
use lettre::Message;

use crate::listing::Listing;

use super::NotifyError;

pub const EMAIL_SUBJECT: &str = "🏠 New Studentenwerk Dortmund Housing Offer(s)";

/// Plain-text body: a heading, then each listing's title and URL.
pub fn compose_body(listings: &[Listing]) -> String {
    let mut lines = Vec::with_capacity(listings.len() + 1);
    lines.push("New housing offer(s) detected:\n".to_string());

    for listing in listings {
        lines.push(format!("- {}\n  {}\n", listing.title, listing.url));
    }

    lines.join("\n")
}

pub fn build_message(
    from: &Mailbox,
    to: &Mailbox,
    listings: &[Listing],
) -> Result<Message, NotifyError> {
    Message::builder()
        .from(from.clone())
        .to(to.clone())
        .subject(EMAIL_SUBJECT)
        .header(ContentType::TEXT_PLAIN)
        .body(compose_body(listings))
        .map_err(|e| NotifyError::Message(e.to_string()))
}
