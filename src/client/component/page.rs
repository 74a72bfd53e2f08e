use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaSpinner, Icon};

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

/// Spinner centered in a block of at least the given height class.
#[component]
pub fn LoadingSpinner(class: Option<&'static str>) -> Element {
    let class: &str = class.unwrap_or("min-h-[300px]");

    rsx!(
        div {
            class: "flex items-center justify-center {class}",
            Icon {
                class: "animate-spin text-primary",
                width: 32,
                height: 32,
                icon: FaSpinner
            }
        }
    )
}
