//! # Mock backend — the calls the views await
//!
//! [`MockBackend`] stands in for a real API. Every call is an `async fn`
//! returning `Result<_, ApiError>`: it re-checks its input, waits for the
//! configured latency, then builds its answer locally. Swapping in a real
//! client later only has to keep these signatures.
//!
//! | Call | Latency | Result |
//! |------|---------|--------|
//! | [`login`](MockBackend::login) | `login_ms` | [`User`] with id 1, name taken from the email's local part |
//! | [`register`](MockBackend::register) | `register_ms` | [`User`] with an epoch-millisecond id |
//! | [`submit_blood_request`](MockBackend::submit_blood_request) | `request_ms` | [`BloodRequest`] |
//! | [`donor_dashboard`](MockBackend::donor_dashboard) | `dashboard_ms` | [`DonorDashboard`] |
//! | [`recipient_dashboard`](MockBackend::recipient_dashboard) | `dashboard_ms` | [`RecipientDashboard`] |

use store::{BloodGroup, Role, User};
use tracing::{debug, info};

use crate::config::{config, LatencyConfig};
use crate::dashboard::{donor_fixture, recipient_fixture, DonorDashboard, RecipientDashboard};
use crate::delay::simulate_latency;
use crate::error::ApiError;
use crate::forms::{BloodRequest, BloodRequestForm, LoginForm, RegisterForm};
use crate::validation::FieldErrors;

/// Id given to every user signed in through the mock login.
const LOGIN_USER_ID: u64 = 1;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MockBackend {
    latency: LatencyConfig,
}

/// Backend configured from the bundled `blooddonate.toml`.
pub fn backend() -> MockBackend {
    MockBackend::new(config().latency.clone())
}

fn ensure_valid(errors: FieldErrors) -> Result<(), ApiError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Invalid(errors))
    }
}

impl MockBackend {
    pub fn new(latency: LatencyConfig) -> Self {
        Self { latency }
    }

    /// Sign in. Any well-formed credentials are accepted.
    pub async fn login(&self, form: &LoginForm) -> Result<User, ApiError> {
        ensure_valid(form.validate())?;
        debug!(role = %form.role, "login requested");
        simulate_latency(self.latency.login()).await;

        let name = form.email.split('@').next().unwrap_or_default().to_string();
        let blood_group = match form.role {
            Role::Donor => Some(BloodGroup::OPos),
            Role::Recipient | Role::Admin => None,
        };
        let user = User {
            id: LOGIN_USER_ID,
            name,
            email: form.email.clone(),
            role: form.role,
            blood_group,
            phone: None,
        };
        info!(role = %user.role, "login accepted");
        Ok(user)
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<User, ApiError> {
        ensure_valid(form.validate())?;
        debug!(role = %form.role, "registration requested");
        simulate_latency(self.latency.register()).await;

        let id = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        let user = User {
            id,
            name: form.name.trim().to_string(),
            email: form.email.clone(),
            role: form.role,
            blood_group: form.blood_group,
            phone: Some(form.phone.trim().to_string()),
        };
        info!(user_id = user.id, role = %user.role, "registration accepted");
        Ok(user)
    }

    pub async fn submit_blood_request(
        &self,
        form: &BloodRequestForm,
    ) -> Result<BloodRequest, ApiError> {
        ensure_valid(form.validate())?;
        let (Some(blood_group), Some(required_date)) =
            (form.blood_group, form.parsed_required_date())
        else {
            // validate() already rejects both cases
            return Err(ApiError::Invalid(form.validate()));
        };
        debug!(urgency = %form.urgency, units = form.units, "blood request submitted");
        simulate_latency(self.latency.request()).await;

        let request = BloodRequest {
            patient_name: form.patient_name.trim().to_string(),
            blood_group,
            units: form.units,
            urgency: form.urgency,
            hospital: form.hospital.trim().to_string(),
            contact_name: form.contact_name.trim().to_string(),
            contact_phone: form.contact_phone.trim().to_string(),
            contact_email: form.contact_email.clone(),
            reason: form.reason.trim().to_string(),
            required_date,
        };
        info!(blood_group = %request.blood_group, urgency = %request.urgency, "blood request accepted");
        Ok(request)
    }

    pub async fn donor_dashboard(&self) -> Result<DonorDashboard, ApiError> {
        simulate_latency(self.latency.dashboard()).await;
        Ok(donor_fixture())
    }

    pub async fn recipient_dashboard(&self) -> Result<RecipientDashboard, ApiError> {
        simulate_latency(self.latency.dashboard()).await;
        Ok(recipient_fixture())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{field, Urgency};
    use std::time::Duration;

    fn instant() -> MockBackend {
        MockBackend::new(LatencyConfig::none())
    }

    #[tokio::test]
    async fn test_login_builds_donor() {
        let form = LoginForm {
            email: "jane.doe@example.com".to_string(),
            password: "secret1".to_string(),
            role: Role::Donor,
        };
        let user = instant().login(&form).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "jane.doe");
        assert_eq!(user.email, "jane.doe@example.com");
        assert_eq!(user.blood_group, Some(BloodGroup::OPos));
    }

    #[tokio::test]
    async fn test_login_admin_has_no_blood_group() {
        let form = LoginForm {
            email: "root@example.com".to_string(),
            password: "secret1".to_string(),
            role: Role::Admin,
        };
        let user = instant().login(&form).await.unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(user.blood_group.is_none());
    }

    #[tokio::test]
    async fn test_invalid_login_is_rejected() {
        let err = instant().login(&LoginForm::default()).await.unwrap_err();
        let ApiError::Invalid(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.contains(field::EMAIL));
    }

    #[tokio::test]
    async fn test_register_keeps_entered_details() {
        let form = RegisterForm {
            name: " Sam ".to_string(),
            email: "sam@example.com".to_string(),
            phone: "555-0100".to_string(),
            role: Role::Recipient,
            blood_group: Some(BloodGroup::BNeg),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        };
        let user = instant().register(&form).await.unwrap();
        assert_eq!(user.name, "Sam");
        assert_eq!(user.role, Role::Recipient);
        assert_eq!(user.blood_group, Some(BloodGroup::BNeg));
        assert_eq!(user.phone.as_deref(), Some("555-0100"));
        assert!(user.id > 1);
    }

    #[tokio::test]
    async fn test_register_without_blood_group_is_rejected() {
        let form = RegisterForm {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            phone: "555-0100".to_string(),
            role: Role::Donor,
            blood_group: None,
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        };
        assert!(matches!(
            instant().register(&form).await,
            Err(ApiError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn test_submit_blood_request() {
        let form = BloodRequestForm {
            patient_name: "Pat".to_string(),
            blood_group: Some(BloodGroup::AbPos),
            units: 3,
            urgency: Urgency::Emergency,
            hospital: "City Hospital".to_string(),
            contact_name: "Kim".to_string(),
            contact_phone: "555-0101".to_string(),
            contact_email: "kim@example.com".to_string(),
            reason: "Accident".to_string(),
            required_date: "2024-05-02".to_string(),
        };
        let request = instant().submit_blood_request(&form).await.unwrap();
        assert_eq!(request.blood_group, BloodGroup::AbPos);
        assert_eq!(request.urgency, Urgency::Emergency);
        assert_eq!(request.required_date.to_string(), "2024-05-02");
    }

    #[tokio::test]
    async fn test_empty_blood_request_is_rejected() {
        let result = instant()
            .submit_blood_request(&BloodRequestForm::default())
            .await;
        assert!(matches!(result, Err(ApiError::Invalid(e)) if e.len() == 8));
    }

    #[tokio::test]
    async fn test_dashboards_load() {
        let backend = instant();
        assert_eq!(backend.donor_dashboard().await.unwrap().total_donations(), 3);
        assert_eq!(
            backend.recipient_dashboard().await.unwrap().units_received(),
            6
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_waited_out() {
        let backend = MockBackend::new(LatencyConfig {
            dashboard_ms: 1000,
            ..LatencyConfig::none()
        });
        let started = tokio::time::Instant::now();
        backend.donor_dashboard().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
