use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Proposal {
    pub id: Uuid,
    pub engineer_id: Uuid,
    pub service_id: Uuid,
    pub content: String,
    pub budget: Decimal,
    pub accepted: bool,
    pub created_at: DateTime<Utc>,
}
