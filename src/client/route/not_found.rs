use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Página não encontrada | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center gap-4 text-center",
            h1 { class: "text-4xl font-bold", "404" }
            p { class: "opacity-70", "Nada encontrado em /{path}" }
            Link {
                to: Route::Services {},
                class: "btn btn-primary",
                "Voltar aos serviços"
            }
        }
    }
}
