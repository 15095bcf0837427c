use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::error::{Error, Result};
use crate::middleware::auth::Claims;
use crate::models::user::User;

pub fn sign_token(user: &User, secret: &str, ttl_hours: i64) -> Result<String> {
    let exp = Utc::now() + Duration::hours(ttl_hours);
    let claims = Claims {
        sub: user.id.to_string(),
        exp: exp.timestamp() as usize,
        role: Some(user.role.to_string()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("Failed to sign token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{Role, VerifyStatus};
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
    use uuid::Uuid;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            full_name: "Sami Haddad".into(),
            email: "sami@example.com".into(),
            password_hash: "hash".into(),
            role: Role::Engineer,
            profile_pic: None,
            verify_status: VerifyStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn signed_token_round_trips() {
        let user = sample_user();
        let token = sign_token(&user, "test_secret", 24).unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test_secret"),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();
        assert_eq!(decoded.claims.sub, user.id.to_string());
        assert_eq!(decoded.claims.role.as_deref(), Some("engineer"));
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let user = sample_user();
        let token = sign_token(&user, "test_secret", 24).unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"other_secret"),
            &Validation::new(Algorithm::HS256),
        );
        assert!(decoded.is_err());
    }
}
