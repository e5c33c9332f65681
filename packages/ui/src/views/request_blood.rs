//! Blood request form, open to everyone.

use api::{field, BloodRequestForm, FieldErrors, Urgency, MAX_UNITS, MIN_UNITS};
use dioxus::prelude::*;
use store::BloodGroup;
use tracing::{info, warn};

use crate::components::{Alert, AlertBox, InputField, SelectField, SelectOption};
use crate::views::{blood_group_options, error_for, SubmitButton};

const REQUEST_SUBMITTED: &str = "Blood request submitted successfully! We will contact you soon.";
const REQUEST_FAILED: &str = "Failed to submit request. Please try again.";

#[component]
pub fn RequestBloodView() -> Element {
    let mut form = use_signal(BloodRequestForm::default);
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
            match api::backend().submit_blood_request(&values).await {
                Ok(request) => {
                    info!(hospital = %request.hospital, units = request.units, "blood request sent");
                    alert.set(Some(Alert::success(REQUEST_SUBMITTED)));
                    form.set(BloodRequestForm::default());
                }
                Err(e) => {
                    warn!(error = %e, "blood request failed");
                    alert.set(Some(Alert::error(REQUEST_FAILED)));
                }
            }
            loading.set(false);
        });
    };

    let urgency_options: Vec<SelectOption> = Urgency::ALL
        .iter()
        .map(|u| SelectOption::new(u.as_str(), u.label()))
        .collect();
    let values = form();
    let blood_group = values
        .blood_group
        .map(|g| g.as_str().to_string())
        .unwrap_or_default();
    let reason_error = error_for(&errors.read(), field::REASON);

    rsx! {
        div {
            class: "recipient-request-page",
            div {
                class: "container",
                div {
                    class: "request-header",
                    h1 { "Request Blood" }
                    p { "Submit a blood request for patients in need" }
                }

                div {
                    class: "request-container",
                    div {
                        class: "request-card card",
                        if let Some(current) = alert() {
                            AlertBox {
                                kind: current.kind,
                                message: current.message,
                                onclose: move |_| alert.set(None),
                            }
                        }

                        form {
                            class: "request-form",
                            onsubmit: handle_submit,

                            div {
                                class: "form-section",
                                h3 { "Patient Information" }
                                div {
                                    class: "form-grid",
                                    InputField {
                                        label: "Patient Name",
                                        name: field::PATIENT_NAME.to_string(),
                                        value: values.patient_name.clone(),
                                        placeholder: "Enter patient's full name",
                                        error: error_for(&errors.read(), field::PATIENT_NAME),
                                        required: true,
                                        oninput: move |evt: FormEvent| {
                                            form.write().patient_name = evt.value();
                                            errors.write().clear(field::PATIENT_NAME);
                                        },
                                    }
                                    SelectField {
                                        label: "Blood Group Required",
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
                                    InputField {
                                        label: "Units Required",
                                        r#type: "number",
                                        name: field::UNITS.to_string(),
                                        value: values.units.to_string(),
                                        error: error_for(&errors.read(), field::UNITS),
                                        min: Some(MIN_UNITS.to_string()),
                                        max: Some(MAX_UNITS.to_string()),
                                        required: true,
                                        oninput: move |evt: FormEvent| {
                                            form.write().units = evt.value().trim().parse().unwrap_or(0);
                                            errors.write().clear(field::UNITS);
                                        },
                                    }
                                    SelectField {
                                        label: "Urgency Level",
                                        name: "urgency",
                                        value: values.urgency.as_str().to_string(),
                                        options: urgency_options,
                                        style: format!("border-color: {}", values.urgency.color()),
                                        onchange: move |evt: FormEvent| {
                                            if let Ok(urgency) = evt.value().parse::<Urgency>() {
                                                form.write().urgency = urgency;
                                            }
                                        },
                                    }
                                }
                            }

                            div {
                                class: "form-section",
                                h3 { "Hospital Information" }
                                div {
                                    class: "form-grid",
                                    InputField {
                                        label: "Hospital Name",
                                        name: field::HOSPITAL.to_string(),
                                        value: values.hospital.clone(),
                                        placeholder: "Enter hospital name",
                                        error: error_for(&errors.read(), field::HOSPITAL),
                                        required: true,
                                        oninput: move |evt: FormEvent| {
                                            form.write().hospital = evt.value();
                                            errors.write().clear(field::HOSPITAL);
                                        },
                                    }
                                    InputField {
                                        label: "Required Date",
                                        r#type: "date",
                                        name: field::REQUIRED_DATE.to_string(),
                                        value: values.required_date.clone(),
                                        error: error_for(&errors.read(), field::REQUIRED_DATE),
                                        required: true,
                                        oninput: move |evt: FormEvent| {
                                            form.write().required_date = evt.value();
                                            errors.write().clear(field::REQUIRED_DATE);
                                        },
                                    }
                                }
                            }

                            div {
                                class: "form-section",
                                h3 { "Contact Information" }
                                div {
                                    class: "form-grid",
                                    InputField {
                                        label: "Contact Person Name",
                                        name: field::CONTACT_NAME.to_string(),
                                        value: values.contact_name.clone(),
                                        placeholder: "Enter contact person name",
                                        error: error_for(&errors.read(), field::CONTACT_NAME),
                                        required: true,
                                        oninput: move |evt: FormEvent| {
                                            form.write().contact_name = evt.value();
                                            errors.write().clear(field::CONTACT_NAME);
                                        },
                                    }
                                    InputField {
                                        label: "Contact Phone",
                                        r#type: "tel",
                                        name: field::CONTACT_PHONE.to_string(),
                                        value: values.contact_phone.clone(),
                                        placeholder: "Enter contact phone number",
                                        error: error_for(&errors.read(), field::CONTACT_PHONE),
                                        required: true,
                                        oninput: move |evt: FormEvent| {
                                            form.write().contact_phone = evt.value();
                                            errors.write().clear(field::CONTACT_PHONE);
                                        },
                                    }
                                    InputField {
                                        label: "Contact Email",
                                        r#type: "email",
                                        name: field::CONTACT_EMAIL.to_string(),
                                        value: values.contact_email.clone(),
                                        placeholder: "Enter contact email",
                                        error: error_for(&errors.read(), field::CONTACT_EMAIL),
                                        required: true,
                                        oninput: move |evt: FormEvent| {
                                            form.write().contact_email = evt.value();
                                            errors.write().clear(field::CONTACT_EMAIL);
                                        },
                                    }
                                }
                            }

                            div {
                                class: "form-section",
                                h3 { "Additional Information" }
                                div {
                                    class: "form-group",
                                    label { r#for: "input-reason", class: "form-label", "Reason for Blood Requirement" }
                                    textarea {
                                        id: "input-reason",
                                        name: field::REASON,
                                        class: "form-textarea",
                                        rows: "4",
                                        placeholder: "Please describe the reason for blood requirement...",
                                        value: "{values.reason}",
                                        oninput: move |evt: FormEvent| {
                                            form.write().reason = evt.value();
                                            errors.write().clear(field::REASON);
                                        },
                                    }
                                    if let Some(error) = reason_error {
                                        div { class: "error-message", "{error}" }
                                    }
                                }
                            }

                            SubmitButton {
                                class: "btn btn-primary btn-large submit-btn",
                                busy: loading(),
                                label: "Submit Blood Request",
                                busy_label: "Submitting Request...",
                            }
                        }
                    }
                }
            }
        }
    }
}
