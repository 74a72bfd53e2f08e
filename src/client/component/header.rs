use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaScissors, Icon};

use crate::client::{constant::SITE_NAME, router::Route, store::unit::use_unit_state};

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Services {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        class: "text-primary",
                        width: 28,
                        height: 28,
                        icon: FaScissors
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            UnitSelector {}
        }
    })
}

/// Switches the unit every page is scoped to.
#[component]
fn UnitSelector() -> Element {
    let mut unit_state = use_unit_state();
    let units = unit_state.read().units().to_vec();
    let current = unit_state.read().current();

    if let Some(err) = unit_state.read().units.error() {
        return rsx!(
            span {
                class: "badge badge-error",
                title: "{err}",
                "Unidades indisponíveis"
            }
        );
    }

    if units.len() < 2 {
        return rsx!(
            if let Some(unit) = units.first() {
                p {
                    class: "text-sm opacity-70",
                    "{unit.name}"
                }
            }
        );
    }

    rsx!(
        select {
            class: "select select-bordered select-sm",
            "aria-label": "Unidade",
            onchange: move |evt| {
                if let Ok(unit_id) = evt.value().parse::<i32>() {
                    unit_state.write().select(unit_id);
                }
            },
            for unit in units {
                option {
                    key: "{unit.id}",
                    value: "{unit.id}",
                    selected: current.unit_id == Some(unit.id),
                    "{unit.name}"
                }
            }
        }
    )
}
