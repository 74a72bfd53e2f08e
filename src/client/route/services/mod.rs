pub mod controller;
pub mod examples;

mod example_grid;
mod service_card;
mod service_form;

use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaPlus, Icon};

use crate::{
    client::{
        component::{LoadingSpinner, Page},
        constant::SITE_NAME,
        store::{
            service::use_services,
            unit::{use_current_unit, use_unit_state},
        },
    },
    model::service::{ServiceDto, ServicePayloadDto},
};

use controller::{EditState, PageController, PageView};
use example_grid::ExampleGrid;
use examples::ExampleService;
use service_card::ServiceCard;
use service_form::ServiceFormModal;

#[component]
pub fn Services() -> Element {
    let unit_state = use_unit_state();
    let unit_id = use_memo(move || unit_state.read().current().unit_id);
    let current_unit = use_current_unit();

    let services = use_services(unit_id);
    let edit_state = use_signal(EditState::default);
    let controller = PageController::new(edit_state, services);

    let view = PageView::derive(
        current_unit.is_loading,
        services.is_loading(),
        services.services(),
    );
    let modal = edit_state.read().clone();

    if view == PageView::UnitLoading {
        return rsx! {
            Title { "Serviços | {SITE_NAME}" }
            Page {
                LoadingSpinner { class: "min-h-[400px]" }
            }
        };
    }

    let content = match view {
        PageView::Catalog(list) => rsx! {
            div {
                class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                for service in list {
                    ServiceCard {
                        key: "{service.id}",
                        service: service.clone(),
                        on_edit: move |service: ServiceDto| controller.open_for_edit(service),
                        on_delete: move |id: i32| controller.delete(id),
                    }
                }
            }
        },
        PageView::Examples => rsx! {
            ExampleGrid {
                on_add: move |example: ExampleService| controller.add_example(&example),
                on_create: move |_| controller.open_for_create(),
            }
        },
        PageView::UnitLoading | PageView::ServicesLoading => rsx! { LoadingSpinner {} },
    };

    rsx! {
        Title { "Serviços | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl space-y-6",
                div {
                    class: "flex items-center justify-between",
                    div {
                        h1 { class: "text-3xl font-bold tracking-tight", "Serviços" }
                        p { class: "mt-1 opacity-70", "Cadastre cortes e defina preços" }
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-primary gap-2",
                        onclick: move |_| controller.open_for_create(),
                        Icon { width: 16, height: 16, icon: FaPlus }
                        "Novo Serviço"
                    }
                }
                {content}
            }
            ServiceFormModal {
                open: modal.is_open(),
                on_close: move |_| controller.close(),
                service: modal.editing().cloned(),
                on_submit: move |payload: ServicePayloadDto| controller.submit(payload),
                is_loading: services.is_saving(),
            }
        }
    }
}
