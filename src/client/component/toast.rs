use dioxus::prelude::*;

use crate::client::store::toast::{use_toasts, Toast};

#[cfg(feature = "web")]
use crate::client::store::toast::TOAST_TIMEOUT_MS;

#[component]
pub fn ToastContainer() -> Element {
    let toasts = use_toasts();
    let items = toasts.read().items().to_vec();

    rsx!(
        div {
            class: "toast toast-end toast-bottom z-50",
            for toast in items {
                ToastMessage { key: "{toast.id}", toast: toast.clone() }
            }
        }
    )
}

#[component]
fn ToastMessage(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    #[cfg(feature = "web")]
    use_future(move || async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
        toasts.write().dismiss(id);
    });

    rsx!(
        div {
            role: "alert",
            class: "alert alert-error shadow-lg",
            span { "{toast.message}" }
            button {
                r#type: "button",
                class: "btn btn-sm btn-ghost",
                onclick: move |_| toasts.write().dismiss(id),
                "✕"
            }
        }
    )
}
