pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

#[component]
pub fn Modal(
    open: bool,
    on_close: EventHandler<()>,
    title: String,
    prevent_close: bool,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or_default();
    // Focus modal when it opens
    #[cfg(feature = "web")]
    use_effect(use_reactive!(|open| {
        if open {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    }));

    let close = move |_: MouseEvent| {
        if !prevent_close {
            on_close.call(());
        }
    };

    rsx!(
        div {
            class: if open { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape && !prevent_close {
                    on_close.call(());
                }
            },
            div {
                class: "modal-box {class} border border-base-300 w-11/12 max-w-lg",
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 {
                        class: "font-bold text-lg",
                        "{title}"
                    }
                    if !prevent_close {
                        button {
                            r#type: "button",
                            class: "btn btn-sm btn-circle btn-ghost",
                            onclick: close,
                            "✕"
                        }
                    }
                }
                div {
                    {children}
                }
            }
            div {
                class: "modal-backdrop",
                onclick: close,
            }
        }
    )
}
