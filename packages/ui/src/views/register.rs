//! Registration page.

use api::{field, FieldErrors, RegisterForm};
use dioxus::prelude::*;
use store::{BloodGroup, Role};
use tracing::warn;

use crate::components::{Alert, AlertBox, InputField, SelectField, SelectOption};
use crate::routes::AppPath;
use crate::session::{sign_in, use_session};
use crate::views::{blood_group_options, error_for, SubmitButton};

const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

/// Roles a visitor may register as.
const REGISTER_ROLES: [Role; 2] = [Role::Donor, Role::Recipient];

#[component]
pub fn RegisterView(#[props(default)] role: Option<Role>) -> Element {
    let session = use_session();
    let preset = role
        .filter(|r| REGISTER_ROLES.contains(r))
        .unwrap_or_default();
    let mut form = use_signal(|| RegisterForm::with_role(preset));
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
            let result = api::backend().register(&values).await;
            loading.set(false);
            match result.and_then(|user| sign_in(session, user)) {
                Ok(()) => alert.set(Some(Alert::success(
                    "Registration successful! Welcome to BloodDonate!",
                ))),
                Err(e) => {
                    warn!(error = %e, "registration failed");
                    alert.set(Some(Alert::error(REGISTRATION_FAILED)));
                }
            }
        });
    };

    let role_options: Vec<SelectOption> = REGISTER_ROLES
        .iter()
        .map(|r| SelectOption::new(r.as_str(), r.label()))
        .collect();
    let current_role = form.read().role;
    let blood_group = form
        .read()
        .blood_group
        .map(|g| g.as_str().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "register-page",
            div {
                class: "container",
                div {
                    class: "register-container",
                    div {
                        class: "register-card card",
                        div {
                            class: "register-header",
                            div {
                                class: "register-logo",
                                span { class: "heart-icon", "❤️" }
                                h1 { "BloodDonate" }
                            }
                            h2 { "Create Account" }
                            p { "Join our community of lifesavers" }
                        }

                        if let Some(current) = alert() {
                            AlertBox {
                                kind: current.kind,
                                message: current.message,
                                onclose: move |_| alert.set(None),
                            }
                        }

                        form {
                            class: "register-form",
                            onsubmit: handle_submit,
                            InputField {
                                label: "Full Name",
                                name: field::NAME.to_string(),
                                value: form.read().name.clone(),
                                placeholder: "Enter your full name",
                                error: error_for(&errors.read(), field::NAME),
                                required: true,
                                oninput: move |evt: FormEvent| {
                                    form.write().name = evt.value();
                                    errors.write().clear(field::NAME);
                                },
                            }
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
                                label: "Phone Number",
                                r#type: "tel",
                                name: field::PHONE.to_string(),
                                value: form.read().phone.clone(),
                                placeholder: "Enter your phone number",
                                error: error_for(&errors.read(), field::PHONE),
                                required: true,
                                oninput: move |evt: FormEvent| {
                                    form.write().phone = evt.value();
                                    errors.write().clear(field::PHONE);
                                },
                            }
                            SelectField {
                                label: "Register As",
                                name: "role",
                                value: current_role.as_str().to_string(),
                                options: role_options,
                                onchange: move |evt: FormEvent| {
                                    if let Ok(role) = evt.value().parse::<Role>() {
                                        form.write().role = role;
                                    }
                                },
                            }
                            if current_role.requires_blood_group() {
                                SelectField {
                                    label: "Blood Group",
                                    name: field::BLOOD_GROUP.to_string(),
                                    value: blood_group,
                                    options: blood_group_options(),
                                    placeholder: "Select Blood Group",
                                    error: error_for(&errors.read(), field::BLOOD_GROUP),
                                    onchange: move |evt: FormEvent| {
                                        form.write().blood_group = evt.value().parse::<BloodGroup>().ok();
                                        errors.write().clear(field::BLOOD_GROUP);
                                    },
                                }
                            }
                            InputField {
                                label: "Password",
                                r#type: "password",
                                name: field::PASSWORD.to_string(),
                                value: form.read().password.clone(),
                                placeholder: "Create a password",
                                error: error_for(&errors.read(), field::PASSWORD),
                                required: true,
                                oninput: move |evt: FormEvent| {
                                    form.write().password = evt.value();
                                    errors.write().clear(field::PASSWORD);
                                },
                            }
                            InputField {
                                label: "Confirm Password",
                                r#type: "password",
                                name: field::CONFIRM_PASSWORD.to_string(),
                                value: form.read().confirm_password.clone(),
                                placeholder: "Confirm your password",
                                error: error_for(&errors.read(), field::CONFIRM_PASSWORD),
                                required: true,
                                oninput: move |evt: FormEvent| {
                                    form.write().confirm_password = evt.value();
                                    errors.write().clear(field::CONFIRM_PASSWORD);
                                },
                            }
                            SubmitButton {
                                class: "btn btn-primary btn-large register-btn",
                                busy: loading(),
                                label: "Create Account",
                                busy_label: "Creating Account...",
                            }
                        }

                        div {
                            class: "register-footer",
                            p {
                                "Already have an account? "
                                Link {
                                    to: AppPath::Login.with_role(current_role),
                                    class: "link-primary",
                                    "Sign in here"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
