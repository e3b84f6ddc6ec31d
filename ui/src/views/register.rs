use std::rc::Rc;

use api::{ApiClient, RegisterRequest};
use dioxus::prelude::*;

use crate::components::app_navbar::nav_builder;
use crate::prefs::use_prefs;

#[derive(Clone, PartialEq)]
enum RegisterStatus {
    Idle,
    Working,
    Done,
    Error(String),
}

/// Builds the request from the raw form fields. Optional fields left blank
/// stay off the wire entirely.
fn request_from_form(
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    phone: &str,
) -> RegisterRequest {
    let optional = |value: &str| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    };
    RegisterRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
        first_name: optional(first_name),
        last_name: optional(last_name),
        phone: optional(phone),
        role: None,
    }
}

#[component]
pub fn Register() -> Element {
    let prefs = use_prefs();
    let client = use_context::<Rc<ApiClient>>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let status = use_signal(|| RegisterStatus::Idle);

    let title = prefs.tr("auth.register");
    let email_label = prefs.tr("auth.email");
    let password_label = prefs.tr("auth.password");
    let first_name_label = prefs.tr("auth.firstName");
    let last_name_label = prefs.tr("auth.lastName");
    let phone_label = prefs.tr("auth.phone");
    let working_label = prefs.tr("auth.registering");
    let done_label = prefs.tr("auth.registered");
    let login_label = prefs.tr("auth.login");

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status() == RegisterStatus::Working {
            return;
        }
        let request = request_from_form(
            &email(),
            &password(),
            &first_name(),
            &last_name(),
            &phone(),
        );
        if request.email.is_empty() || request.password.is_empty() {
            return;
        }
        let client = Rc::clone(&client);
        let mut status_signal = status;
        status_signal.set(RegisterStatus::Working);
        spawn(async move {
            match client.register(&request).await {
                Ok(response) if response.success => status_signal.set(RegisterStatus::Done),
                Ok(response) => status_signal.set(RegisterStatus::Error(response.message)),
                Err(err) => status_signal.set(RegisterStatus::Error(err.to_string())),
            }
        });
    };

    if status() == RegisterStatus::Done {
        let login_link = nav_builder().map(|builder| (builder.login)(&login_label));
        return rsx! {
            section { class: "page page-register",
                div { class: "login-card",
                    h1 { class: "login-card__title", "{done_label}" }
                    if let Some(link) = login_link {
                        p { class: "login-card__status login-card__status--success", {link} }
                    }
                }
            }
        };
    }

    let working = status() == RegisterStatus::Working;
    let status_line = match status() {
        RegisterStatus::Error(message) => Some(rsx! {
            p { class: "login-card__status login-card__status--error", "{message}" }
        }),
        _ => None,
    };

    rsx! {
        section { class: "page page-register",
            form { class: "login-card", onsubmit: on_submit,
                h1 { class: "login-card__title", "{title}" }

                div { class: "login-card__field",
                    label { class: "login-card__label", r#for: "register-email", "{email_label}" }
                    input {
                        id: "register-email",
                        class: "login-card__input",
                        r#type: "email",
                        autocomplete: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div { class: "login-card__field",
                    label { class: "login-card__label", r#for: "register-password", "{password_label}" }
                    input {
                        id: "register-password",
                        class: "login-card__input",
                        r#type: "password",
                        autocomplete: "new-password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                div { class: "login-card__field",
                    label { class: "login-card__label", r#for: "register-first", "{first_name_label}" }
                    input {
                        id: "register-first",
                        class: "login-card__input",
                        r#type: "text",
                        autocomplete: "given-name",
                        value: "{first_name}",
                        oninput: move |evt| first_name.set(evt.value()),
                    }
                }

                div { class: "login-card__field",
                    label { class: "login-card__label", r#for: "register-last", "{last_name_label}" }
                    input {
                        id: "register-last",
                        class: "login-card__input",
                        r#type: "text",
                        autocomplete: "family-name",
                        value: "{last_name}",
                        oninput: move |evt| last_name.set(evt.value()),
                    }
                }

                div { class: "login-card__field",
                    label { class: "login-card__label", r#for: "register-phone", "{phone_label}" }
                    input {
                        id: "register-phone",
                        class: "login-card__input",
                        r#type: "tel",
                        autocomplete: "tel",
                        value: "{phone}",
                        oninput: move |evt| phone.set(evt.value()),
                    }
                }

                button {
                    r#type: "submit",
                    class: "button button--primary login-card__submit",
                    disabled: working,
                    if working { "{working_label}" } else { "{title}" }
                }

                {status_line}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_fields_stay_off_the_wire() {
        let request = request_from_form(" pilgrim@example.com ", "hunter2", " Amina ", "", "  ");
        assert_eq!(request.email, "pilgrim@example.com");
        assert_eq!(request.password, "hunter2");
        assert_eq!(request.first_name.as_deref(), Some("Amina"));
        assert_eq!(request.last_name, None);
        assert_eq!(request.phone, None);
        assert_eq!(request.role, None);
    }

    #[test]
    fn password_is_never_trimmed() {
        let request = request_from_form("a@b.c", " spaced pass ", "", "", "");
        assert_eq!(request.password, " spaced pass ");
    }
}
