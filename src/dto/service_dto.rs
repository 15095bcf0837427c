use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::service::{ExperienceLevel, Service, ServiceStatus};

fn positive_budget(budget: &Decimal) -> Result<(), ValidationError> {
    if budget.is_sign_positive() && !budget.is_zero() {
        Ok(())
    } else {
        Err(ValidationError::new("budget_not_positive"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateServicePayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(custom(function = "positive_budget"))]
    pub budget: Decimal,
    #[serde(default)]
    pub skills: Vec<String>,
    pub level: ExperienceLevel,
    pub status: Option<ServiceStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateServicePayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(custom(function = "positive_budget"))]
    pub budget: Option<Decimal>,
    pub skills: Option<Vec<String>>,
    pub level: Option<ExperienceLevel>,
    pub status: Option<ServiceStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub status: String,
    pub data: ServiceData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceData {
    pub service: Service,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceListResponse {
    pub status: String,
    pub data: ServiceListData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceListData {
    pub services: Vec<Service>,
}

impl From<Service> for ServiceResponse {
    fn from(value: Service) -> Self {
        Self {
            status: "success".to_string(),
            data: ServiceData { service: value },
        }
    }
}

impl From<Vec<Service>> for ServiceListResponse {
    fn from(value: Vec<Service>) -> Self {
        Self {
            status: "success".to_string(),
            data: ServiceListData { services: value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_rejects_zero_budget() {
        let payload = CreateServicePayload {
            title: "Web Design".into(),
            description: "Responsive marketing site".into(),
            budget: Decimal::ZERO,
            skills: vec!["HTML".into()],
            level: ExperienceLevel::Intermediate,
            status: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn create_payload_accepts_positive_budget() {
        let payload = CreateServicePayload {
            title: "Web Design".into(),
            description: "Responsive marketing site".into(),
            budget: Decimal::from(500),
            skills: vec![],
            level: ExperienceLevel::Entry,
            status: Some(ServiceStatus::Pending),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn status_serializes_kebab_case() {
        let s = serde_json::to_string(&ServiceStatus::InProgress).unwrap();
        assert_eq!(s, "\"in-progress\"");
    }
}
