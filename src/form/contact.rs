//! Contact form: validation, submission and status feedback.

use gloo_console::log;
use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::{FormData, HtmlInputElement};
use yew::prelude::*;

use crate::config;
use crate::form::phone;
use crate::form::validate::{self, Field, FieldErrors, FormFields};

const SUBMIT_LABEL: &str = "Enviar solicitud";
const SUBMIT_BUSY_LABEL: &str = "Enviando...";

const MSG_CHECK_FIELDS: &str = "Revisa los campos marcados antes de enviar.";
const MSG_CONFIGURE_ENDPOINT: &str = "Configura tu endpoint de Formspree antes de enviar.";
const MSG_SENT: &str = "Solicitud enviada correctamente. Te contactaremos pronto.";
const MSG_SEND_FAILED: &str = "Ocurrió un error al enviar. Intenta nuevamente.";

/// Error payload of the form relay; decoded for console logging only, the
/// user always gets the generic retry message.
#[derive(Deserialize, Debug)]
struct RelayError {
    #[serde(default)]
    errors: Vec<RelayErrorDetail>,
}

#[derive(Deserialize, Debug)]
struct RelayErrorDetail {
    message: String,
}

/// What the status region currently shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormStatus {
    Idle,
    Error(&'static str),
    Success(&'static str),
}

impl FormStatus {
    fn message(self) -> Option<&'static str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Error(message) | FormStatus::Success(message) => Some(message),
        }
    }

    fn css_suffix(self) -> Option<&'static str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Error(_) => Some("error"),
            FormStatus::Success(_) => Some("success"),
        }
    }
}

pub enum ContactMsg {
    Update(Field, String),
    Submit,
    Completed(Result<(), String>),
}

pub struct ContactForm {
    fields: FormFields,
    errors: FieldErrors,
    status: FormStatus,
    sending: bool,
}

impl Component for ContactForm {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            fields: FormFields::default(),
            errors: FieldErrors::default(),
            status: FormStatus::Idle,
            sending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Update(field, value) => {
                // The phone field re-formats on every keystroke.
                let value = if field == Field::Telefono {
                    phone::format(&value)
                } else {
                    value
                };
                self.fields.set(field, value);
                true
            }
            ContactMsg::Submit => self.start_submit(ctx),
            ContactMsg::Completed(result) => {
                // Always restore the submit button, whatever the outcome.
                self.sending = false;
                match result {
                    Ok(()) => {
                        self.fields.clear();
                        self.status = FormStatus::Success(MSG_SENT);
                    }
                    Err(detail) => {
                        log!("contact form submission failed:", detail);
                        self.status = FormStatus::Error(MSG_SEND_FAILED);
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|event: SubmitEvent| {
            event.prevent_default();
            ContactMsg::Submit
        });

        html! {
            <form id="contactForm" class="contact-form" novalidate={true} onsubmit={onsubmit}>
                <div class="form-field">
                    <label for="nombre">{ "Nombre" }</label>
                    <input
                        id="nombre"
                        name="nombre"
                        type="text"
                        placeholder="Tu nombre"
                        value={self.fields.nombre.clone()}
                        class={self.input_class(Field::Nombre)}
                        oninput={self.on_field_input(ctx, Field::Nombre)}
                    />
                    { self.field_error(Field::Nombre) }
                </div>

                <div class="form-field">
                    <label for="correo">{ "Correo" }</label>
                    <input
                        id="correo"
                        name="correo"
                        type="email"
                        placeholder="tu@correo.cl"
                        value={self.fields.correo.clone()}
                        class={self.input_class(Field::Correo)}
                        oninput={self.on_field_input(ctx, Field::Correo)}
                    />
                    { self.field_error(Field::Correo) }
                </div>

                <div class="form-field">
                    <label for="telefono">{ "Teléfono" }</label>
                    <input
                        id="telefono"
                        name="telefono"
                        type="tel"
                        placeholder="+56 9 1234 5678"
                        value={self.fields.telefono.clone()}
                        class={self.input_class(Field::Telefono)}
                        oninput={self.on_field_input(ctx, Field::Telefono)}
                    />
                    { self.field_error(Field::Telefono) }
                </div>

                <div class="form-field">
                    <label for="mensaje">{ "Mensaje" }</label>
                    <textarea
                        id="mensaje"
                        name="mensaje"
                        rows="5"
                        placeholder="Cuéntanos qué necesitas"
                        value={self.fields.mensaje.clone()}
                        class={self.input_class(Field::Mensaje)}
                        oninput={self.on_field_input(ctx, Field::Mensaje)}
                    />
                    { self.field_error(Field::Mensaje) }
                </div>

                <p id="formStatus" role="status" class={classes!("form-status", self.status.css_suffix())}>
                    { self.status.message().unwrap_or_default() }
                </p>

                <button type="submit" class="submit-button" disabled={self.sending}>
                    { if self.sending { SUBMIT_BUSY_LABEL } else { SUBMIT_LABEL } }
                </button>
            </form>
        }
    }
}

impl ContactForm {
    fn start_submit(&mut self, ctx: &Context<Self>) -> bool {
        if self.sending {
            return false;
        }

        self.status = FormStatus::Idle;
        self.errors = validate::validate(&self.fields);
        if !self.errors.is_empty() {
            self.status = FormStatus::Error(MSG_CHECK_FIELDS);
            return true;
        }

        let Some(endpoint) = config::resolve_endpoint(config::page_endpoint_override().as_deref())
        else {
            self.status = FormStatus::Error(MSG_CONFIGURE_ENDPOINT);
            return true;
        };

        self.sending = true;
        let fields = self.fields.clone();
        ctx.link()
            .send_future(async move { ContactMsg::Completed(send(&endpoint, &fields).await) });
        true
    }

    fn on_field_input(&self, ctx: &Context<Self>, field: Field) -> Callback<InputEvent> {
        ctx.link().callback(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            ContactMsg::Update(field, input.value())
        })
    }

    fn input_class(&self, field: Field) -> Classes {
        classes!(self.errors.get(field).map(|_| "error"))
    }

    fn field_error(&self, field: Field) -> Html {
        html! {
            <p class="field-error" data-error-for={field.name()}>
                { self.errors.get(field).unwrap_or_default() }
            </p>
        }
    }
}

/// POSTs the four fields as multipart form data and maps any transport or
/// HTTP failure to a loggable detail string.
async fn send(endpoint: &str, fields: &FormFields) -> Result<(), String> {
    let data = FormData::new().map_err(|err| format!("{err:?}"))?;
    for field in Field::ALL {
        data.append_with_str(field.name(), fields.get(field))
            .map_err(|err| format!("{err:?}"))?;
    }

    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .body(data)
        .send()
        .await
        .map_err(|err| err.to_string())?;

    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let detail = match response.text().await {
            Ok(text) => match serde_json::from_str::<RelayError>(&text) {
                Ok(relay) => relay
                    .errors
                    .into_iter()
                    .map(|error| error.message)
                    .collect::<Vec<_>>()
                    .join("; "),
                Err(_) => text,
            },
            Err(_) => String::new(),
        };
        Err(format!("status {status}: {detail}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_status_renders_nothing() {
        assert_eq!(FormStatus::Idle.message(), None);
        assert_eq!(FormStatus::Idle.css_suffix(), None);
    }

    #[test]
    fn error_and_success_map_to_their_css_classes() {
        let error = FormStatus::Error(MSG_SEND_FAILED);
        assert_eq!(error.message(), Some(MSG_SEND_FAILED));
        assert_eq!(error.css_suffix(), Some("error"));

        let success = FormStatus::Success(MSG_SENT);
        assert_eq!(success.message(), Some(MSG_SENT));
        assert_eq!(success.css_suffix(), Some("success"));
    }

    #[test]
    fn relay_error_decodes_formspree_payload() {
        let relay: RelayError =
            serde_json::from_str(r#"{"errors":[{"message":"form disabled"}]}"#).unwrap();
        assert_eq!(relay.errors.len(), 1);
        assert_eq!(relay.errors[0].message, "form disabled");
    }

    #[test]
    fn relay_error_tolerates_missing_errors_key() {
        let relay: RelayError = serde_json::from_str("{}").unwrap();
        assert!(relay.errors.is_empty());
    }
}
