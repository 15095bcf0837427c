use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::engineer_dto::EngineerResponse;
use crate::models::proposal::Proposal;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SubmitProposalPayload {
    pub content: Option<String>,
    pub budget: Option<Decimal>,
    pub service: Option<Uuid>,
    pub engineer_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UpdateProposalPayload {
    pub content: Option<String>,
    pub budget: Option<Decimal>,
    pub service: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalCreated {
    pub message: String,
    pub proposal: Proposal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalAccepted {
    pub status: String,
    pub message: String,
    pub data: Proposal,
}

/// A proposal expanded with its submitting engineer and that engineer's
/// owning user, the shape the service detail page consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandedProposal {
    pub id: Uuid,
    pub service_id: Uuid,
    pub content: String,
    pub budget: Decimal,
    pub accepted: bool,
    pub created_at: DateTime<Utc>,
    pub engineer: EngineerResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceProposalsResponse {
    pub status: String,
    pub data: ServiceProposalsData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceProposalsData {
    pub proposals: Vec<ExpandedProposal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineerProposalsResponse {
    pub proposals: Vec<Proposal>,
}
