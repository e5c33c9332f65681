//! Sign-in page.

use api::{field, FieldErrors, LoginForm};
use dioxus::prelude::*;
use store::Role;
use tracing::warn;

use crate::components::{Alert, AlertBox, InputField, SelectField, SelectOption};
use crate::routes::AppPath;
use crate::session::{sign_in, use_session};
use crate::views::{error_for, SubmitButton};

const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Sign-in form. `role` preselects the "Login As" select; an admin preset
/// hides the select entirely.
#[component]
pub fn LoginView(#[props(default)] role: Option<Role>) -> Element {
    let session = use_session();
    let preset = role.unwrap_or_default();
    let mut form = use_signal(|| LoginForm::with_role(preset));
    let mut errors = use_signal(FieldErrors::new);
    let mut alert = use_signal(|| Option::<Alert>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let values = form();
        let found = values.validate();
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }

        spawn(async move {
            loading.set(true);
            alert.set(None);
            let result = api::backend().login(&values).await;
            loading.set(false);
            match result.and_then(|user| sign_in(session, user)) {
                Ok(()) => alert.set(Some(Alert::success("Login successful! Redirecting..."))),
                Err(e) => {
                    warn!(error = %e, "login failed");
                    alert.set(Some(Alert::error(LOGIN_FAILED)));
                }
            }
        });
    };

    let role_options: Vec<SelectOption> = Role::ALL
        .iter()
        .map(|r| SelectOption::new(r.as_str(), r.label()))
        .collect();

    rsx! {
        div {
            class: "login-page",
            div {
                class: "container",
                div {
                    class: "login-container",
                    div {
                        class: "login-card card",
                        div {
                            class: "login-header",
                            div {
                                class: "login-logo",
                                span { class: "heart-icon", "❤️" }
                                h1 { "BloodDonate" }
                            }
                            h2 { "Welcome Back" }
                            p { "Sign in to your account to continue" }
                        }

                        if let Some(current) = alert() {
                            AlertBox {
                                kind: current.kind,
                                message: current.message,
                                onclose: move |_| alert.set(None),
                            }
                        }

                        form {
                            class: "login-form",
                            onsubmit: handle_submit,
                            InputField {
                                label: "Email Address",
                                r#type: "email",
                                name: field::EMAIL.to_string(),
                                value: form.read().email.clone(),
                                placeholder: "Enter your email",
                                error: error_for(&errors.read(), field::EMAIL),
                                required: true,
                                oninput: move |evt: FormEvent| {
                                    form.write().email = evt.value();
                                    errors.write().clear(field::EMAIL);
                                },
                            }
                            InputField {
                                label: "Password",
                                r#type: "password",
                                name: field::PASSWORD.to_string(),
                                value: form.read().password.clone(),
                                placeholder: "Enter your password",
                                error: error_for(&errors.read(), field::PASSWORD),
                                required: true,
                                oninput: move |evt: FormEvent| {
                                    form.write().password = evt.value();
                                    errors.write().clear(field::PASSWORD);
                                },
                            }
                            if preset != Role::Admin {
                                SelectField {
                                    label: "Login As",
                                    name: "role",
                                    value: form.read().role.as_str().to_string(),
                                    options: role_options,
                                    onchange: move |evt: FormEvent| {
                                        if let Ok(role) = evt.value().parse::<Role>() {
                                            form.write().role = role;
                                        }
                                    },
                                }
                            }
                            SubmitButton {
                                class: "btn btn-primary btn-large login-btn",
                                busy: loading(),
                                label: "Sign In",
                                busy_label: "Signing In...",
                            }
                        }

                        div {
                            class: "login-footer",
                            p {
                                "Don't have an account? "
                                Link {
                                    to: AppPath::Register.with_role(form.read().role),
                                    class: "link-primary",
                                    "Sign up here"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
