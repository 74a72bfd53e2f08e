use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaClock, FaPlus, FaScissors},
    Icon,
};

use crate::client::format::{format_brl, format_duration};

use super::examples::{ExampleService, EXAMPLE_SERVICES};

/// Empty-catalog state: one-click example services plus a blank-form action.
#[component]
pub fn ExampleGrid(on_add: EventHandler<ExampleService>, on_create: EventHandler<()>) -> Element {
    rsx!(
        div {
            class: "space-y-6",
            div {
                class: "text-center",
                div {
                    class: "flex justify-center opacity-40",
                    Icon { width: 48, height: 48, icon: FaScissors }
                }
                h3 { class: "mt-4 text-lg font-medium", "Comece com exemplos ou crie do zero" }
                p {
                    class: "mt-1 text-sm opacity-70",
                    "Clique para adicionar, depois edite conforme seu negócio"
                }
            }
            div {
                class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                for example in EXAMPLE_SERVICES {
                    ExampleCard { key: "{example.name}", example, on_add }
                }
            }
            div {
                class: "flex justify-center",
                button {
                    r#type: "button",
                    class: "btn btn-outline gap-2",
                    onclick: move |_| on_create.call(()),
                    Icon { width: 16, height: 16, icon: FaPlus }
                    "Criar serviço personalizado"
                }
            }
        }
    )
}

#[component]
fn ExampleCard(example: ExampleService, on_add: EventHandler<ExampleService>) -> Element {
    let price = format_brl(example.price);
    let duration = format_duration(example.duration_minutes);

    rsx!(
        button {
            r#type: "button",
            class: "card border-2 border-dashed border-base-300 hover:border-primary/50 hover:bg-base-200 transition-colors cursor-pointer group",
            onclick: move |_| on_add.call(example),
            div {
                class: "card-body p-4 items-center text-center gap-2",
                div {
                    class: "w-10 h-10 rounded-full bg-primary/10 group-hover:bg-primary/20 flex items-center justify-center text-primary",
                    Icon { width: 18, height: 18, icon: FaPlus }
                }
                h4 { class: "font-medium", "{example.name}" }
                p { class: "text-lg font-semibold text-primary", "{price}" }
                div {
                    class: "flex items-center gap-1 text-xs opacity-70",
                    Icon { width: 10, height: 10, icon: FaClock }
                    span { "{duration}" }
                }
            }
        }
    )
}
