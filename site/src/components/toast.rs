//! Toast notification host.

use leptos::prelude::*;

use crate::store::{ToastKind, ToastStore};

/// Renders the active toasts in a fixed corner stack. Mounted once by the
/// root component.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = ToastStore::expect();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <strong>{toast.title}</strong>
                                <p>{toast.message}</p>
                            </div>
                            <button
                                class="toast-dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
