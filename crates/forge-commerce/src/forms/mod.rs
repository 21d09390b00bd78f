//! Lead-generation forms: definitions, validation and transport payloads.

mod definition;
mod payload;

pub use definition::{Delivery, LeadForm, Urgency};
pub use payload::{Attachment, Payload, Submission, FORM_ENDPOINT, FORM_NAME_FIELD, HONEYPOT_FIELD};
