use dioxus::prelude::*;

use crate::{
    client::{component::Modal, format::parse_price},
    model::service::{ServiceDto, ServicePayloadDto, MAX_SERVICE_NAME_LEN},
};

const DEFAULT_DURATION_MINUTES: i32 = 30;

/// Raw form input, kept as text until submit.
#[derive(Clone, Debug, PartialEq)]
pub struct FormFields {
    pub name: String,
    pub price: String,
    pub duration: String,
    pub is_active: bool,
}

impl FormFields {
    /// Fields prefilled from `service`, or blank ones for a new service.
    pub fn for_service(service: Option<&ServiceDto>) -> Self {
        match service {
            Some(service) => Self {
                name: service.name.clone(),
                price: format!("{:.2}", service.price).replace('.', ","),
                duration: service.duration_minutes.to_string(),
                is_active: service.is_active,
            },
            None => Self {
                name: String::new(),
                price: String::new(),
                duration: DEFAULT_DURATION_MINUTES.to_string(),
                is_active: true,
            },
        }
    }

    pub fn to_payload(&self) -> Result<ServicePayloadDto, String> {
        let price = parse_price(&self.price).ok_or_else(|| "Informe um preço válido".to_string())?;
        let duration_minutes = self
            .duration
            .trim()
            .parse::<i32>()
            .map_err(|_| "Informe a duração em minutos".to_string())?;

        let payload = ServicePayloadDto {
            name: self.name.trim().to_string(),
            price,
            duration_minutes,
            is_active: self.is_active,
        };
        payload.validate().map_err(|e| e.to_string())?;

        Ok(payload)
    }
}

#[component]
pub fn ServiceFormModal(
    open: bool,
    on_close: EventHandler<()>,
    service: Option<ServiceDto>,
    on_submit: EventHandler<ServicePayloadDto>,
    is_loading: bool,
) -> Element {
    let mut fields = use_signal(|| FormFields::for_service(None));
    let mut error = use_signal(|| None::<String>);
    let is_edit = service.is_some();

    // Reset the form every time the modal opens
    use_effect(use_reactive!(|open, service| {
        if open {
            fields.set(FormFields::for_service(service.as_ref()));
            error.set(None);
        }
    }));

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        match fields.read().to_payload() {
            Ok(payload) => {
                error.set(None);
                on_submit.call(payload);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let title = if is_edit {
        "Editar Serviço"
    } else {
        "Novo Serviço"
    };

    rsx!(
        Modal {
            open,
            on_close,
            title: title.to_string(),
            prevent_close: is_loading,
            form {
                class: "flex flex-col gap-4",
                onsubmit: submit,
                fieldset {
                    class: "fieldset",
                    label { class: "label", r#for: "service-name", "Nome" }
                    input {
                        id: "service-name",
                        r#type: "text",
                        class: "input w-full",
                        placeholder: "Ex.: Corte Masculino",
                        maxlength: "{MAX_SERVICE_NAME_LEN}",
                        value: "{fields.read().name}",
                        oninput: move |evt| fields.write().name = evt.value(),
                        disabled: is_loading,
                    }
                }
                div {
                    class: "grid grid-cols-2 gap-4",
                    fieldset {
                        class: "fieldset",
                        label { class: "label", r#for: "service-price", "Preço (R$)" }
                        input {
                            id: "service-price",
                            r#type: "text",
                            inputmode: "decimal",
                            class: "input w-full",
                            placeholder: "0,00",
                            value: "{fields.read().price}",
                            oninput: move |evt| fields.write().price = evt.value(),
                            disabled: is_loading,
                        }
                    }
                    fieldset {
                        class: "fieldset",
                        label { class: "label", r#for: "service-duration", "Duração (min)" }
                        input {
                            id: "service-duration",
                            r#type: "number",
                            min: "1",
                            step: "1",
                            class: "input w-full",
                            value: "{fields.read().duration}",
                            oninput: move |evt| fields.write().duration = evt.value(),
                            disabled: is_loading,
                        }
                    }
                }
                label {
                    class: "label cursor-pointer justify-start gap-3",
                    input {
                        r#type: "checkbox",
                        class: "toggle toggle-primary",
                        checked: fields.read().is_active,
                        onchange: move |evt| fields.write().is_active = evt.checked(),
                        disabled: is_loading,
                    }
                    span { "Serviço ativo" }
                }

                if let Some(err) = error() {
                    div {
                        class: "alert alert-error",
                        span { "{err}" }
                    }
                }

                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| on_close.call(()),
                        disabled: is_loading,
                        "Cancelar"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_loading,
                        if is_loading {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Salvando..."
                        } else if is_edit {
                            "Salvar"
                        } else {
                            "Criar"
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn fields(name: &str, price: &str, duration: &str) -> FormFields {
        FormFields {
            name: name.to_string(),
            price: price.to_string(),
            duration: duration.to_string(),
            is_active: true,
        }
    }

    #[test]
    fn blank_fields_for_new_service() {
        let fields = FormFields::for_service(None);

        assert_eq!(fields.name, "");
        assert_eq!(fields.price, "");
        assert_eq!(fields.duration, "30");
        assert!(fields.is_active);
    }

    #[test]
    fn prefills_from_existing_service() {
        let now = Utc::now();
        let service = ServiceDto {
            id: 3,
            unit_id: 1,
            name: "Barba".to_string(),
            price: 30.5,
            duration_minutes: 20,
            is_active: false,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(
            FormFields::for_service(Some(&service)),
            FormFields {
                name: "Barba".to_string(),
                price: "30,50".to_string(),
                duration: "20".to_string(),
                is_active: false,
            }
        );
    }

    #[test]
    fn builds_trimmed_payload() {
        let payload = fields("  Corte Degradê ", "55,00", " 40 ").to_payload();

        assert_eq!(
            payload,
            Ok(ServicePayloadDto {
                name: "Corte Degradê".to_string(),
                price: 55.0,
                duration_minutes: 40,
                is_active: true,
            })
        );
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(
            fields("Barba", "trinta", "20").to_payload(),
            Err("Informe um preço válido".to_string())
        );
        assert_eq!(
            fields("Barba", "30", "").to_payload(),
            Err("Informe a duração em minutos".to_string())
        );
        assert_eq!(
            fields("  ", "30", "20").to_payload(),
            Err("O nome do serviço é obrigatório".to_string())
        );
        assert_eq!(
            fields("Barba", "-1", "20").to_payload(),
            Err("O preço não pode ser negativo".to_string())
        );
        assert_eq!(
            fields("Barba", "1.000.000,01", "20").to_payload(),
            Err("O preço deve ser de no máximo R$ 1.000.000,00".to_string())
        );
        assert_eq!(
            fields("Barba", "30", "0").to_payload(),
            Err("A duração deve ser de pelo menos 1 minuto".to_string())
        );
    }
}
