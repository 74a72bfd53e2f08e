use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaClock, FaPen, FaTrash},
    Icon,
};

use crate::{
    client::{
        component::ConfirmationModal,
        format::{format_brl, format_duration},
    },
    model::service::ServiceDto,
};

/// One service of the catalog; deleting asks for confirmation first.
#[component]
pub fn ServiceCard(
    service: ServiceDto,
    on_edit: EventHandler<ServiceDto>,
    on_delete: EventHandler<i32>,
) -> Element {
    let mut confirm_delete = use_signal(|| false);
    let service_id = service.id;
    let price = format_brl(service.price);
    let duration = format_duration(service.duration_minutes);
    let name = service.name.clone();
    let edit_target = service.clone();

    rsx!(
        div {
            class: "card bg-base-200 border border-base-300",
            class: if !service.is_active { "opacity-60" },
            div {
                class: "card-body gap-3",
                div {
                    class: "flex items-start justify-between gap-2",
                    h3 { class: "card-title text-base", "{service.name}" }
                    if service.is_active {
                        span { class: "badge badge-success badge-sm", "Ativo" }
                    } else {
                        span { class: "badge badge-ghost badge-sm", "Inativo" }
                    }
                }
                p { class: "text-2xl font-semibold text-primary", "{price}" }
                div {
                    class: "flex items-center gap-1 text-sm opacity-70",
                    Icon { width: 12, height: 12, icon: FaClock }
                    span { "{duration}" }
                }
                div {
                    class: "card-actions justify-end",
                    button {
                        r#type: "button",
                        class: "btn btn-sm btn-ghost gap-2",
                        onclick: move |_| on_edit.call(edit_target.clone()),
                        Icon { width: 14, height: 14, icon: FaPen }
                        "Editar"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-sm btn-ghost text-error gap-2",
                        onclick: move |_| confirm_delete.set(true),
                        Icon { width: 14, height: 14, icon: FaTrash }
                        "Excluir"
                    }
                }
            }
        }
        ConfirmationModal {
            open: confirm_delete(),
            on_close: move |_| confirm_delete.set(false),
            title: "Excluir serviço".to_string(),
            message: rsx!(
                p {
                    class: "py-4",
                    "Tem certeza que deseja excluir "
                    strong { "{name}" }
                    "? Esta ação não pode ser desfeita."
                }
            ),
            confirm_text: "Excluir".to_string(),
            confirm_class: "btn-error".to_string(),
            on_confirm: move |_| {
                confirm_delete.set(false);
                on_delete.call(service_id);
            },
        }
    )
}
