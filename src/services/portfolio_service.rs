use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::portfolio_dto::{CreateCertificatePayload, CreatePortfolioPayload};
use crate::error::{Error, Result};
use crate::models::certificate::Certificate;
use crate::models::portfolio::Portfolio;

#[derive(Clone)]
pub struct PortfolioService {
    pool: PgPool,
}

impl PortfolioService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn add_certificate(
        &self,
        user_id: Uuid,
        payload: CreateCertificatePayload,
    ) -> Result<Certificate> {
        self.require_user(user_id).await?;
        let certificate = sqlx::query_as::<_, Certificate>(
            "INSERT INTO certificates (user_id, title, authority, file_url)
             VALUES ($1, $2, $3, $4)
             RETURNING id, user_id, title, authority, file_url, created_at",
        )
        .bind(user_id)
        .bind(payload.title)
        .bind(payload.authority)
        .bind(payload.file_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(certificate)
    }

    pub async fn list_certificates(&self, user_id: Uuid) -> Result<Vec<Certificate>> {
        let certificates = sqlx::query_as::<_, Certificate>(
            "SELECT id, user_id, title, authority, file_url, created_at
             FROM certificates WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(certificates)
    }

    pub async fn delete_certificate(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM certificates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Certificate not found".to_string()));
        }
        Ok(())
    }

    pub async fn add_portfolio(
        &self,
        user_id: Uuid,
        payload: CreatePortfolioPayload,
    ) -> Result<Portfolio> {
        self.require_user(user_id).await?;
        let portfolio = sqlx::query_as::<_, Portfolio>(
            "INSERT INTO portfolios (user_id, title, description, link)
             VALUES ($1, $2, $3, $4)
             RETURNING id, user_id, title, description, link, created_at",
        )
        .bind(user_id)
        .bind(payload.title)
        .bind(payload.description)
        .bind(payload.link)
        .fetch_one(&self.pool)
        .await?;
        Ok(portfolio)
    }

    pub async fn list_portfolios(&self, user_id: Uuid) -> Result<Vec<Portfolio>> {
        let portfolios = sqlx::query_as::<_, Portfolio>(
            "SELECT id, user_id, title, description, link, created_at
             FROM portfolios WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(portfolios)
    }

    pub async fn delete_portfolio(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM portfolios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Portfolio not found".to_string()));
        }
        Ok(())
    }

    async fn require_user(&self, user_id: Uuid) -> Result<()> {
        let exists = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_none() {
            return Err(Error::NotFound("No user found with this ID".to_string()));
        }
        Ok(())
    }
}
