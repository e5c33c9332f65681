use api::FieldErrors;
use dioxus::prelude::*;
use store::BloodGroup;

use crate::components::SelectOption;

mod admin_panel;
pub use admin_panel::AdminPanelView;

mod dashboard_parts;

mod donor_dashboard;
pub use donor_dashboard::DonorDashboardView;

mod home;
pub use home::HomeView;

mod login;
pub use login::LoginView;

mod not_found;
pub use not_found::NotFoundView;

mod recipient_dashboard;
pub use recipient_dashboard::RecipientDashboardView;

mod register;
pub use register::RegisterView;

mod request_blood;
pub use request_blood::RequestBloodView;

mod role_access;
pub use role_access::RoleAccessView;

/// Owned copy of one field's message, for passing to a field component.
pub(crate) fn error_for(errors: &FieldErrors, field: &str) -> Option<String> {
    errors.get(field).map(str::to_string)
}

pub(crate) fn blood_group_options() -> Vec<SelectOption> {
    BloodGroup::ALL
        .iter()
        .map(|g| SelectOption::new(g.as_str(), g.as_str()))
        .collect()
}

/// Submit button that shows a spinner and `busy_label` while a request runs.
#[component]
pub(crate) fn SubmitButton(
    label: String,
    busy_label: String,
    busy: bool,
    #[props(default)] class: String,
) -> Element {
    rsx! {
        button {
            r#type: "submit",
            class: "{class}",
            disabled: busy,
            if busy {
                div { class: "spinner-small" }
                "{busy_label}"
            } else {
                "{label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_for_copies_message() {
        let mut errors = FieldErrors::new();
        errors.insert(api::field::EMAIL, "Email is required");
        assert_eq!(
            error_for(&errors, api::field::EMAIL).as_deref(),
            Some("Email is required")
        );
        assert_eq!(error_for(&errors, api::field::PASSWORD), None);
    }

    #[test]
    fn test_blood_group_options_in_select_order() {
        let values: Vec<String> = blood_group_options().into_iter().map(|o| o.value).collect();
        assert_eq!(values, ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"]);
    }
}
