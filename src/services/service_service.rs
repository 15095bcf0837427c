use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::service_dto::{CreateServicePayload, UpdateServicePayload};
use crate::error::{Error, Result};
use crate::models::service::{Service, ServiceStatus};

const SERVICE_COLUMNS: &str =
    "id, title, description, budget, skills, level, status, deleted_at, created_at, updated_at";

#[derive(Clone)]
pub struct ServiceService {
    pool: PgPool,
}

impl ServiceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateServicePayload) -> Result<Service> {
        let status = payload.status.unwrap_or(ServiceStatus::Pending);
        let service = sqlx::query_as::<_, Service>(&format!(
            "INSERT INTO services (title, description, budget, skills, level, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {SERVICE_COLUMNS}"
        ))
        .bind(payload.title)
        .bind(payload.description)
        .bind(payload.budget)
        .bind(payload.skills)
        .bind(payload.level)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(service)
    }

    pub async fn list(&self) -> Result<Vec<Service>> {
        let services = sqlx::query_as::<_, Service>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Service> {
        sqlx::query_as::<_, Service>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services
             WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("No service found with this id: {}", id)))
    }

    pub async fn update(&self, id: Uuid, payload: UpdateServicePayload) -> Result<Service> {
        sqlx::query_as::<_, Service>(&format!(
            "UPDATE services
             SET title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 budget = COALESCE($4, budget),
                 skills = COALESCE($5, skills),
                 level = COALESCE($6, level),
                 status = COALESCE($7, status),
                 updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {SERVICE_COLUMNS}"
        ))
        .bind(id)
        .bind(payload.title)
        .bind(payload.description)
        .bind(payload.budget)
        .bind(payload.skills)
        .bind(payload.level)
        .bind(payload.status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("No service found with this id: {}", id)))
    }

    /// Soft delete: stamps `deleted_at` and hides the row from reads.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query(
            "UPDATE services SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("No service found with this id: {}", id)));
        }
        Ok(())
    }
}
