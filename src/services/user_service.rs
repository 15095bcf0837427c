use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::user_dto::{SignupPayload, UpdateMePayload};
use crate::error::{Error, Result};
use crate::models::user::{Role, User, VerifyStatus};

const USER_COLUMNS: &str =
    "id, full_name, email, password_hash, role, profile_pic, verify_status, created_at, updated_at";

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Sign-up. An engineer account also gets its 1:1 engineer record so the
    /// profile pages have something to aggregate from day one.
    pub async fn create_user(&self, payload: SignupPayload) -> Result<User> {
        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&payload.email)
            .fetch_optional(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(Error::Conflict(
                "A user with this email address already exists.".to_string(),
            ));
        }

        let password_hash = hash_password(&payload.password)?;
        let role = payload.role.unwrap_or(Role::Client);

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (full_name, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&payload.full_name)
        .bind(&payload.email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await?;

        if user.role == Role::Engineer {
            sqlx::query("INSERT INTO engineers (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
                .bind(user.id)
                .execute(&self.pool)
                .await?;
        }

        Ok(user)
    }

    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::Unauthorized("Incorrect email or password".to_string()))?;

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| Error::PasswordHash(e.to_string()))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| Error::Unauthorized("Incorrect email or password".to_string()))?;

        Ok(user)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<User> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("No user found with this ID".to_string()))
    }

    pub async fn update(&self, id: Uuid, payload: UpdateMePayload) -> Result<User> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users
             SET full_name = COALESCE($2, full_name),
                 profile_pic = COALESCE($3, profile_pic),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(payload.full_name)
        .bind(payload.profile_pic)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("No user found with this ID".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("No user found with this ID".to_string()));
        }
        Ok(())
    }

    pub async fn list_pending_verification(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE verify_status = 'pending'
             ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    pub async fn set_verify_status(&self, id: Uuid, status: VerifyStatus) -> Result<User> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET verify_status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("No user found with this ID".to_string()))
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHash(e.to_string()))?
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::hash_password;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};
    use argon2::Argon2;

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("correct horse battery").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"correct horse battery", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"wrong password", &parsed)
            .is_err());
    }
}
