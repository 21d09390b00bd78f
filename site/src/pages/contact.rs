//! Contact page: business info plus the contact form.

use forge_commerce::business;
use forge_commerce::prelude::*;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{HeroSection, TextAreaField, TextField};
use crate::store::ToastStore;
use crate::submit::submit_lead_form;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <HeroSection
            badge="Contact Us"
            title="Let's Connect"
            subtitle="Ready to get your fleet back on the road? Reach out for service requests, quotes, or any questions."
        />

        <section class="page-section contact-grid">
            <div class="contact-info">
                <div class="contact-card phone-cta">
                    <h2>"Call or Text Us"</h2>
                    <a href=business::PHONE_HREF class="phone-number">{business::PHONE_DISPLAY}</a>
                    <p>"Fastest way to reach us during business hours"</p>
                </div>

                <div class="contact-card">
                    <h3>"Contact Information"</h3>
                    <div class="contact-rows">
                        <a href=business::PHONE_HREF class="contact-row">
                            <span class="contact-label">"Phone"</span>
                            <span class="contact-value">{business::PHONE_DISPLAY}</span>
                        </a>
                        <a
                            href=business::WEBSITE_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="contact-row"
                        >
                            <span class="contact-label">"Website"</span>
                            <span class="contact-value">{business::WEBSITE_DISPLAY}</span>
                        </a>
                        <a href=format!("mailto:{}", business::EMAIL) class="contact-row">
                            <span class="contact-label">"Email"</span>
                            <span class="contact-value">{business::EMAIL}</span>
                        </a>
                    </div>
                </div>

                <div class="contact-card">
                    <h3>"Business Hours"</h3>
                    <div class="hours-row">
                        <span>{business::HOURS_DAYS}</span>
                        <span class="hours-value">{business::HOURS}</span>
                    </div>
                </div>

                <div class="contact-card">
                    <h3>"Service Areas"</h3>
                    <div class="chip-row">
                        {business::SERVICE_AREAS
                            .iter()
                            .map(|area| view! { <span class="chip">{*area}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <div class="form-card">
                <h2>"Send Us a Message"</h2>
                <ContactForm/>
            </div>
        </section>

        <section class="cta-section">
            <div class="cta-content">
                <h2 class="cta-headline">"Prefer to Talk?"</h2>
                <p class="cta-subheadline">"Give us a call. We're here to help."</p>
                <div class="cta-buttons">
                    <a href=business::PHONE_HREF class="btn-primary">{business::PHONE_DISPLAY}</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let toasts = ToastStore::expect();
    let submitting = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let name = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let submission = Submission::new(LeadForm::Contact)
            .field("name", name.get())
            .field("company", company.get())
            .field("email", email.get())
            .field("phone", phone.get())
            .field("subject", subject.get())
            .field("message", message.get());

        if let Err(err) = submission.validate() {
            form_error.set(Some(err.to_string()));
            return;
        }
        form_error.set(None);
        submitting.set(true);

        spawn_local(async move {
            match submit_lead_form(&submission).await {
                Ok(()) => {
                    toasts.success("Message Sent", "We'll get back to you as soon as possible.");
                    for field in [name, company, email, phone, subject, message] {
                        field.set(String::new());
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "contact form failed");
                    toasts.error(
                        "Submission failed",
                        format!(
                            "Please try again or call/text us at {}.",
                            business::PHONE_DISPLAY
                        ),
                    );
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <form class="lead-form" on:submit=on_submit>
            <div class="form-row">
                <TextField label="Name" name="name" value=name required=true placeholder="Your name"/>
                <TextField label="Company" name="company" value=company placeholder="Optional"/>
            </div>
            <div class="form-row">
                <TextField
                    label="Email"
                    name="email"
                    value=email
                    required=true
                    input_type="email"
                    placeholder="you@company.com"
                />
                <TextField
                    label="Phone"
                    name="phone"
                    value=phone
                    required=true
                    input_type="tel"
                    placeholder="(555) 555-5555"
                />
            </div>
            <TextField
                label="Subject"
                name="subject"
                value=subject
                required=true
                placeholder="How can we help?"
            />
            <TextAreaField
                label="Message"
                name="message"
                value=message
                required=true
                rows=5
                placeholder="Tell us about your needs..."
            />

            {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <button type="submit" class="btn-primary form-submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Sending..." } else { "Send Message" }}
            </button>

            <p class="form-note">"We typically respond within 2 hours during business hours"</p>
        </form>
    }
}
