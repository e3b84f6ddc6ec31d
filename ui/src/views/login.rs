use std::rc::Rc;

use api::{ApiClient, LoginRequest};
use dioxus::prelude::*;

use crate::components::app_navbar::nav_builder;
use crate::prefs::use_prefs;
use crate::session::SessionContext;

#[derive(Clone, PartialEq)]
enum LoginStatus {
    Idle,
    Working,
    Done,
    Error(String),
}

#[component]
pub fn Login() -> Element {
    let prefs = use_prefs();
    let session = use_context::<SessionContext>();
    let client = use_context::<Rc<ApiClient>>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let status = use_signal(|| LoginStatus::Idle);

    let title = prefs.tr("auth.welcome");
    let email_label = prefs.tr("auth.email");
    let password_label = prefs.tr("auth.password");
    let login_label = prefs.tr("auth.login");
    let working_label = prefs.tr("auth.signingIn");
    let signed_in = prefs.tr("auth.signedIn");
    let register_label = prefs.tr("auth.register");

    if session.is_authenticated() {
        let who = session
            .user()
            .map(|user| user.email)
            .unwrap_or_default();
        return rsx! {
            section { class: "page page-login",
                div { class: "login-card",
                    h1 { class: "login-card__title", "{signed_in}" }
                    p { class: "login-card__status login-card__status--success", "{who}" }
                }
            }
        };
    }

    let submit_session = session.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status() == LoginStatus::Working {
            return;
        }
        let request = LoginRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        if request.email.is_empty() || request.password.is_empty() {
            return;
        }
        let client = Rc::clone(&client);
        let session = submit_session.clone();
        let mut status_signal = status;
        status_signal.set(LoginStatus::Working);
        spawn(async move {
            match client.login(&request).await {
                Ok(response) => {
                    session.login(&response);
                    status_signal.set(LoginStatus::Done);
                }
                Err(err) => status_signal.set(LoginStatus::Error(err.to_string())),
            }
        });
    };

    let working = status() == LoginStatus::Working;
    let status_line = match status() {
        LoginStatus::Idle | LoginStatus::Working => None,
        LoginStatus::Done => Some(rsx! {
            p { class: "login-card__status login-card__status--success", "{signed_in}" }
        }),
        LoginStatus::Error(message) => Some(rsx! {
            p { class: "login-card__status login-card__status--error", "{message}" }
        }),
    };

    rsx! {
        section { class: "page page-login",
            form { class: "login-card", onsubmit: on_submit,
                h1 { class: "login-card__title", "{title}" }

                div { class: "login-card__field",
                    label { class: "login-card__label", r#for: "login-email", "{email_label}" }
                    input {
                        id: "login-email",
                        class: "login-card__input",
                        r#type: "email",
                        autocomplete: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div { class: "login-card__field",
                    label { class: "login-card__label", r#for: "login-password", "{password_label}" }
                    input {
                        id: "login-password",
                        class: "login-card__input",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    r#type: "submit",
                    class: "button button--primary login-card__submit",
                    disabled: working,
                    if working { "{working_label}" } else { "{login_label}" }
                }

                {status_line}

                if let Some(link) = nav_builder().map(|builder| (builder.register)(&register_label)) {
                    p { class: "login-card__status", {link} }
                }
            }
        }
    }
}
