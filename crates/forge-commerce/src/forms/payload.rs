//! Form submission building and validation.
//!
//! A [`Submission`] collects a form's field values, validates the required
//! ones, and produces the transport [`Payload`]: url-encoded pairs when no
//! file is attached, multipart when one is. The `form-name` discriminator
//! and the empty `bot-field` honeypot are always injected; rejecting a
//! non-empty honeypot is the receiving endpoint's job, not ours.

use crate::error::FormError;
use crate::forms::LeadForm;
use serde::{Deserialize, Serialize};

/// The fixed origin-relative endpoint all lead forms POST to.
pub const FORM_ENDPOINT: &str = "/";

/// Field naming the logical form for the receiving endpoint.
pub const FORM_NAME_FIELD: &str = "form-name";

/// Hidden anti-automation field, always submitted empty.
pub const HONEYPOT_FIELD: &str = "bot-field";

/// A file attached to a parts request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attachment {
    /// Original file name.
    pub file_name: String,
    /// MIME type reported by the file input.
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// A lead form filled out and ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    form: LeadForm,
    fields: Vec<(String, String)>,
    attachment: Option<Attachment>,
}

/// Transport payload for a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// `application/x-www-form-urlencoded` body: ordered name/value pairs.
    UrlEncoded(Vec<(String, String)>),
    /// `multipart/form-data` body carrying the attachment.
    Multipart {
        fields: Vec<(String, String)>,
        attachment: Attachment,
    },
}

impl Submission {
    /// Start a submission for a form.
    pub fn new(form: LeadForm) -> Self {
        Self {
            form,
            fields: Vec::new(),
            attachment: None,
        }
    }

    /// Add a field value. Last write wins for a repeated name.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.fields.push((name, value));
        }
        self
    }

    /// Attach a photo. Ignored for forms that do not accept one.
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        if self.form.accepts_attachment() {
            self.attachment = Some(attachment);
        }
        self
    }

    /// The form being submitted.
    pub fn form(&self) -> LeadForm {
        self.form
    }

    /// Get a field's current value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check that every required field is non-empty after trimming.
    ///
    /// Runs before any network call; a failure is surfaced inline and the
    /// POST is never attempted.
    pub fn validate(&self) -> Result<(), FormError> {
        for required in self.form.required_fields() {
            let filled = self
                .get(required)
                .map(|v| !v.trim().is_empty())
                .unwrap_or(false);
            if !filled {
                return Err(FormError::MissingField(required));
            }
        }
        Ok(())
    }

    /// Build the transport payload.
    ///
    /// Injects `form-name` first and the empty honeypot, then picks the
    /// encoding: multipart only when a non-empty attachment is present.
    pub fn payload(&self) -> Payload {
        let mut fields = Vec::with_capacity(self.fields.len() + 2);
        fields.push((FORM_NAME_FIELD.to_string(), self.form.form_name().to_string()));
        fields.push((HONEYPOT_FIELD.to_string(), String::new()));
        for (name, value) in &self.fields {
            if name == FORM_NAME_FIELD || name == HONEYPOT_FIELD {
                continue;
            }
            fields.push((name.clone(), value.clone()));
        }

        match &self.attachment {
            Some(a) if !a.bytes.is_empty() => Payload::Multipart {
                fields,
                attachment: a.clone(),
            },
            _ => Payload::UrlEncoded(fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_contact() -> Submission {
        Submission::new(LeadForm::Contact)
            .field("name", "Mike R.")
            .field("email", "mike@rmlogistics.com")
            .field("phone", "(555) 555-5555")
            .field("subject", "Fleet quote")
            .field("message", "Looking for a PM program for 6 trucks.")
            .field("company", "R&M Logistics")
    }

    #[test]
    fn test_validate_passes_with_required_fields_filled() {
        assert!(filled_contact().validate().is_ok());
    }

    #[test]
    fn test_validate_names_the_missing_field() {
        let sub = Submission::new(LeadForm::Contact)
            .field("name", "Mike R.")
            .field("email", "mike@rmlogistics.com");
        assert_eq!(sub.validate(), Err(FormError::MissingField("phone")));
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let sub = filled_contact().field("subject", "   ");
        assert_eq!(sub.validate(), Err(FormError::MissingField("subject")));
    }

    #[test]
    fn test_optional_fields_are_not_required() {
        // company omitted entirely
        let sub = Submission::new(LeadForm::ServiceRequest)
            .field("name", "Sarah T.")
            .field("phone", "(555) 555-0000")
            .field("email", "sarah@capitalfreight.com")
            .field("location", "Sterling, VA")
            .field("service", "Brake inspection");
        assert!(sub.validate().is_ok());
    }

    #[test]
    fn test_payload_injects_form_name_and_empty_honeypot() {
        let payload = filled_contact().payload();
        match payload {
            Payload::UrlEncoded(fields) => {
                assert_eq!(fields[0], (FORM_NAME_FIELD.to_string(), "contact".to_string()));
                let honeypot = fields.iter().find(|(n, _)| n == HONEYPOT_FIELD).unwrap();
                assert!(honeypot.1.is_empty());
            }
            other => panic!("expected url-encoded payload, got {other:?}"),
        }
    }

    #[test]
    fn test_caller_cannot_override_honeypot() {
        let payload = filled_contact().field(HONEYPOT_FIELD, "spam").payload();
        match payload {
            Payload::UrlEncoded(fields) => {
                let honeypots: Vec<_> =
                    fields.iter().filter(|(n, _)| n == HONEYPOT_FIELD).collect();
                assert_eq!(honeypots.len(), 1);
                assert!(honeypots[0].1.is_empty());
            }
            other => panic!("expected url-encoded payload, got {other:?}"),
        }
    }

    #[test]
    fn test_parts_request_without_photo_is_urlencoded() {
        let sub = Submission::new(LeadForm::PartsRequest)
            .field("contact_name", "James L.")
            .field("phone", "(555) 555-1111")
            .field("email", "james@example.com")
            .field("year", "2019")
            .field("make", "International")
            .field("model", "4300")
            .field("part_needed", "Air compressor");
        assert!(matches!(sub.payload(), Payload::UrlEncoded(_)));
    }

    #[test]
    fn test_parts_request_with_photo_is_multipart() {
        let sub = Submission::new(LeadForm::PartsRequest)
            .field("contact_name", "James L.")
            .with_attachment(Attachment {
                file_name: "part.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                bytes: vec![0xff, 0xd8, 0xff],
            });
        match sub.payload() {
            Payload::Multipart { attachment, fields } => {
                assert_eq!(attachment.file_name, "part.jpg");
                assert_eq!(fields[0].1, "parts-request");
            }
            other => panic!("expected multipart payload, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_falls_back_to_urlencoded() {
        let sub = Submission::new(LeadForm::PartsRequest).with_attachment(Attachment {
            file_name: "empty.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: Vec::new(),
        });
        assert!(matches!(sub.payload(), Payload::UrlEncoded(_)));
    }

    #[test]
    fn test_attachment_ignored_on_non_parts_forms() {
        let sub = filled_contact().with_attachment(Attachment {
            file_name: "photo.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        });
        assert!(matches!(sub.payload(), Payload::UrlEncoded(_)));
    }

    #[test]
    fn test_repeated_field_keeps_last_value() {
        let sub = filled_contact().field("subject", "Updated subject");
        assert_eq!(sub.get("subject"), Some("Updated subject"));
        match sub.payload() {
            Payload::UrlEncoded(fields) => {
                let subjects: Vec<_> = fields.iter().filter(|(n, _)| n == "subject").collect();
                assert_eq!(subjects.len(), 1);
            }
            other => panic!("expected url-encoded payload, got {other:?}"),
        }
    }
}
