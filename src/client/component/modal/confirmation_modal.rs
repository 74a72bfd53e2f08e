use dioxus::prelude::*;

use super::Modal;

#[component]
pub fn ConfirmationModal(
    open: bool,
    on_close: EventHandler<()>,
    title: String,
    message: Element,
    confirm_text: String,
    confirm_class: String,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            open,
            on_close,
            title,
            prevent_close: false,
            {message}
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| on_close.call(()),
                    "Cancelar"
                }
                button {
                    r#type: "button",
                    class: "btn {confirm_class}",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_text}"
                }
            }
        }
    )
}
