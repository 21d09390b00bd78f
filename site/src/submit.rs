//! Lead-form transport.
//!
//! Serializes a validated [`Submission`] and POSTs it to the fixed
//! ingestion endpoint: url-encoded when there is no attachment, multipart
//! when the parts request carries a photo. One call, no retries; a failed
//! submission is re-initiated by the user.

use forge_commerce::prelude::*;
use leptos::prelude::window;
use thiserror::Error;

/// Errors surfaced to the submitting form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// A required field was empty; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] FormError),

    /// The endpoint answered outside the success range.
    #[error("submission failed with HTTP status {0}")]
    Status(u16),

    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
}

/// Validate and deliver a lead form.
///
/// Success means an HTTP status in the 2xx range; everything else is an
/// error the caller turns into retry feedback.
pub async fn submit_lead_form(submission: &Submission) -> Result<(), SubmitError> {
    submission.validate()?;

    let client = reqwest::Client::new();
    let url = endpoint_url();

    let response = match submission.payload() {
        Payload::UrlEncoded(fields) => client.post(&url).form(&fields).send().await,
        Payload::Multipart { fields, attachment } => {
            let mut form = reqwest::multipart::Form::new();
            for (name, value) in fields {
                form = form.text(name, value);
            }
            let part = reqwest::multipart::Part::bytes(attachment.bytes)
                .file_name(attachment.file_name)
                .mime_str(&attachment.content_type)
                .map_err(|e| SubmitError::Network(e.to_string()))?;
            form = form.part("photo", part);
            client.post(&url).multipart(form).send().await
        }
    }
    .map_err(|e| SubmitError::Network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        tracing::info!(form = submission.form().form_name(), "lead form delivered");
        Ok(())
    } else {
        tracing::warn!(
            form = submission.form().form_name(),
            status = status.as_u16(),
            "lead form rejected"
        );
        Err(SubmitError::Status(status.as_u16()))
    }
}

/// Resolve the origin-relative endpoint against the current origin.
///
/// The fetch backend wants an absolute URL even though the endpoint is
/// defined origin-relative.
fn endpoint_url() -> String {
    window()
        .location()
        .origin()
        .map(|origin| format!("{origin}{FORM_ENDPOINT}"))
        .unwrap_or_else(|_| FORM_ENDPOINT.to_string())
}
