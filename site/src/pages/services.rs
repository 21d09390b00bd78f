//! Services page: category listing plus the service-request form.

use forge_commerce::business;
use forge_commerce::prelude::*;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{HeroSection, SectionHeader, TextAreaField, TextField};
use crate::content;
use crate::store::ToastStore;
use crate::submit::submit_lead_form;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <HeroSection
            badge="Our Services"
            title="Professional Mobile Truck Service"
            subtitle="From diagnostics to detailing, we bring the shop to your yard."
        />

        <section class="page-section">
            <SectionHeader
                badge="Capabilities"
                title="What We Handle On-Site"
                subtitle="Four service lines covering the day-to-day needs of a working fleet."
            />
            <div class="card-grid two-col">
                {content::service_categories()
                    .into_iter()
                    .map(|c| view! {
                        <div class="service-category">
                            <span class="feature-icon">{c.icon}</span>
                            <h3>{c.title}</h3>
                            <p class="feature-description">{c.description}</p>
                            <ul class="service-items">
                                {c.items
                                    .into_iter()
                                    .map(|item| view! { <li>{item}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="page-section alt" id="request-service">
            <SectionHeader
                badge="Request Service"
                title="Tell Us What You Need"
                subtitle="We'll get back to you within 30 minutes during business hours."
            />
            <div class="form-card">
                <ServiceRequestForm/>
            </div>
        </section>
    }
}

#[component]
fn ServiceRequestForm() -> impl IntoView {
    let toasts = ToastStore::expect();
    let submitting = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let service = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let submission = Submission::new(LeadForm::ServiceRequest)
            .field("name", name.get())
            .field("phone", phone.get())
            .field("email", email.get())
            .field("company", company.get())
            .field("location", location.get())
            .field("service", service.get())
            .field("notes", notes.get());

        if let Err(err) = submission.validate() {
            form_error.set(Some(err.to_string()));
            return;
        }
        form_error.set(None);
        submitting.set(true);

        spawn_local(async move {
            match submit_lead_form(&submission).await {
                Ok(()) => {
                    toasts.success(
                        "Service Request Submitted",
                        "We'll get back to you within 30 minutes during business hours.",
                    );
                    for field in [name, phone, email, company, location, service, notes] {
                        field.set(String::new());
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "service request failed");
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
                <TextField
                    label="Phone"
                    name="phone"
                    value=phone
                    required=true
                    input_type="tel"
                    placeholder="(555) 555-5555"
                />
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
                <TextField label="Company" name="company" value=company placeholder="Your company"/>
            </div>
            <TextField
                label="Truck Location"
                name="location"
                value=location
                required=true
                placeholder="e.g., Ashburn, VA"
            />
            <TextField
                label="Service Needed"
                name="service"
                value=service
                required=true
                placeholder="e.g., Brake repair, PM service"
            />
            <TextAreaField
                label="Additional Notes"
                name="notes"
                value=notes
                placeholder="Anything else we should know..."
            />

            {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <button type="submit" class="btn-primary form-submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Submitting..." } else { "Request Service" }}
            </button>
        </form>
    }
}
