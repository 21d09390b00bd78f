//! Parts page: the in-stock catalog plus the part-request form.

use forge_commerce::business;
use forge_commerce::prelude::*;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{HeroSection, SectionHeader, TextAreaField, TextField};
use crate::store::{CartStore, ToastStore};
use crate::submit::submit_lead_form;

const UPLOAD_PROMPT: &str = "Click to upload (PNG or JPG)";

#[component]
pub fn PartsPage() -> impl IntoView {
    view! {
        <HeroSection
            badge="Parts & Supplies"
            title="Quality Parts, Fast Delivery"
            subtitle="Shop our in-stock parts or request any part with VIN-based accuracy."
        />

        <section class="page-section">
            <SectionHeader
                badge="In-Stock"
                title="Buy Online Now"
                subtitle="These parts are in stock and ready to ship."
            />
            <div class="card-grid">
                {Catalog::stock()
                    .into_iter()
                    .map(|product| view! { <ProductCard product/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="page-section alt" id="request-part">
            <SectionHeader
                badge="Custom Request"
                title="Request Any Part"
                subtitle="Can't find what you need? We can source it for you."
            />
            <div class="form-card">
                <PartsRequestForm/>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let cart = CartStore::expect();
    let toasts = ToastStore::expect();
    let quantity = RwSignal::new(1u32);

    let name_for_toast = product.name.clone();
    let product_for_add = product.clone();
    let add_to_cart = move |_| {
        let count = quantity.get();
        cart.add_many(&product_for_add, count);
        toasts.success(
            "Added to Cart",
            format!("{count}x {name_for_toast} added to your cart."),
        );
        quantity.set(1);
    };

    view! {
        <div class="product-card">
            <div class="product-media">
                <img src=product.image.clone() alt=product.name.clone()/>
            </div>
            <div class="product-info">
                <h3>{product.name.clone()}</h3>
                <p class="part-number">"Part #: "{product.part_number.clone()}</p>
                <p class="price">{product.price.display()}</p>

                <div class="quantity-stepper">
                    <button
                        type="button"
                        on:click=move |_| quantity.update(|q| *q = (*q).max(2) - 1)
                    >
                        "\u{2212}"
                    </button>
                    <span class="quantity-value">{move || quantity.get()}</span>
                    <button type="button" on:click=move |_| quantity.update(|q| *q += 1)>
                        "+"
                    </button>
                </div>

                <button type="button" class="btn-primary product-add" on:click=add_to_cart>
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}

#[component]
fn PartsRequestForm() -> impl IntoView {
    let toasts = ToastStore::expect();
    let submitting = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let contact_name = RwSignal::new(String::new());
    let company_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let vin = RwSignal::new(String::new());
    let year = RwSignal::new(String::new());
    let make = RwSignal::new(String::new());
    let model = RwSignal::new(String::new());
    let part_needed = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let urgency = RwSignal::new(None::<Urgency>);
    let delivery = RwSignal::new(None::<Delivery>);

    let photo_ref: NodeRef<html::Input> = NodeRef::new();
    let photo_label = RwSignal::new(UPLOAD_PROMPT.to_string());

    let on_photo_change = move |_| {
        let name = photo_ref
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        photo_label.set(name.unwrap_or_else(|| UPLOAD_PROMPT.to_string()));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let base = Submission::new(LeadForm::PartsRequest)
            .field("contact_name", contact_name.get())
            .field("company_name", company_name.get())
            .field("phone", phone.get())
            .field("email", email.get())
            .field("vin", vin.get())
            .field("year", year.get())
            .field("make", make.get())
            .field("model", model.get())
            .field("part_needed", part_needed.get())
            .field("urgency", urgency.get().map(|u| u.as_str()).unwrap_or(""))
            .field("delivery", delivery.get().map(|d| d.as_str()).unwrap_or(""))
            .field("notes", notes.get());

        if let Err(err) = base.validate() {
            form_error.set(Some(err.to_string()));
            return;
        }
        form_error.set(None);
        submitting.set(true);

        let input = photo_ref.get();
        spawn_local(async move {
            let submission = match read_photo(input).await {
                Some(photo) => base.with_attachment(photo),
                None => base,
            };

            match submit_lead_form(&submission).await {
                Ok(()) => {
                    toasts.success(
                        "Part Request Submitted",
                        "We got it. We'll contact you with availability and pricing soon.",
                    );
                    for field in [
                        contact_name,
                        company_name,
                        phone,
                        email,
                        vin,
                        year,
                        make,
                        model,
                        part_needed,
                        notes,
                    ] {
                        field.set(String::new());
                    }
                    urgency.set(None);
                    delivery.set(None);
                    photo_label.set(UPLOAD_PROMPT.to_string());
                    if let Some(input) = photo_ref.get() {
                        input.set_value("");
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "parts request failed");
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
                <TextField
                    label="Contact Name"
                    name="contact_name"
                    value=contact_name
                    required=true
                    placeholder="Your name"
                />
                <TextField
                    label="Company Name"
                    name="company_name"
                    value=company_name
                    placeholder="Optional"
                />
            </div>
            <div class="form-row">
                <TextField
                    label="Phone"
                    name="phone"
                    value=phone
                    required=true
                    input_type="tel"
                    placeholder="(555) 555-5555"
                />
                <TextField
                    label="Email"
                    name="email"
                    value=email
                    required=true
                    input_type="email"
                    placeholder="you@company.com"
                />
            </div>

            <fieldset class="form-group">
                <legend>"Vehicle Information"</legend>
                <TextField
                    label="VIN (Optional)"
                    name="vin"
                    value=vin
                    placeholder="For accurate part matching"
                />
                <div class="form-row three-col">
                    <TextField label="Year" name="year" value=year required=true placeholder="e.g., 2019"/>
                    <TextField
                        label="Make"
                        name="make"
                        value=make
                        required=true
                        placeholder="e.g., International"
                    />
                    <TextField label="Model" name="model" value=model required=true placeholder="e.g., 4300"/>
                </div>
            </fieldset>

            <fieldset class="form-group">
                <legend>"Part Details"</legend>
                <TextField
                    label="Part Needed"
                    name="part_needed"
                    value=part_needed
                    required=true
                    placeholder="Describe the part you need"
                />
                <div class="form-row">
                    <div class="form-field">
                        <label for="urgency">"Urgency"</label>
                        <select
                            id="urgency"
                            name="urgency"
                            on:change=move |ev| urgency.set(Urgency::from_str(&event_target_value(&ev)))
                        >
                            <option value="" selected=move || urgency.get().is_none()>
                                "Select urgency"
                            </option>
                            {Urgency::all()
                                .iter()
                                .map(|u| {
                                    let u = *u;
                                    view! {
                                        <option
                                            value=u.as_str()
                                            selected=move || urgency.get() == Some(u)
                                        >
                                            {u.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="form-field">
                        <label for="delivery">"Delivery Preference"</label>
                        <select
                            id="delivery"
                            name="delivery"
                            on:change=move |ev| delivery.set(Delivery::from_str(&event_target_value(&ev)))
                        >
                            <option value="" selected=move || delivery.get().is_none()>
                                "Select delivery"
                            </option>
                            {Delivery::all()
                                .iter()
                                .map(|d| {
                                    let d = *d;
                                    view! {
                                        <option
                                            value=d.as_str()
                                            selected=move || delivery.get() == Some(d)
                                        >
                                            {d.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                </div>
                <TextAreaField
                    label="Additional Notes"
                    name="notes"
                    value=notes
                    placeholder="Any additional details..."
                />
                <div class="form-field">
                    <label for="photo">"Photo Upload (Optional)"</label>
                    <label class="upload-zone" for="photo">
                        <span>{move || photo_label.get()}</span>
                    </label>
                    <input
                        id="photo"
                        name="photo"
                        type="file"
                        accept="image/*"
                        class="visually-hidden"
                        node_ref=photo_ref
                        on:change=on_photo_change
                    />
                </div>
            </fieldset>

            {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <button type="submit" class="btn-primary form-submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Submitting..." } else { "Submit Part Request" }}
            </button>
        </form>
    }
}

/// Read the selected photo into an [`Attachment`]; `None` when no file is
/// selected or the file is empty.
async fn read_photo(input: Option<web_sys::HtmlInputElement>) -> Option<Attachment> {
    let file = input?.files()?.get(0)?;
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    if bytes.is_empty() {
        return None;
    }
    Some(Attachment {
        file_name: file.name(),
        content_type: file.type_(),
        bytes,
    })
}
