use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Single education record, overwritten whole on every update. Stored as a
/// JSONB document on the engineer row, not as a history table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Engineer {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub skills: Vec<String>,
    pub education: Option<Json<Education>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedJob {
    pub engineer_id: Uuid,
    pub service_id: Uuid,
    pub created_at: DateTime<Utc>,
}
