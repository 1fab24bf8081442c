use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::user::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            role,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }
}

pub fn sign_token(claims: &Claims, secret: &str) -> Result<String> {
    let token = encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn signed_token_decodes_to_same_claims() {
        let claims = Claims::new(
            "1",
            "admin@example.com",
            Role::Admin,
            Utc::now(),
            Duration::hours(24),
        );
        let token = sign_token(&claims, "secret").unwrap();
        assert_eq!(verify_token(&token, "secret").unwrap(), claims);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let claims = Claims::new("1", "a@b.c", Role::Admin, Utc::now(), Duration::hours(1));
        let token = sign_token(&claims, "secret").unwrap();
        assert!(matches!(verify_token(&token, "other"), Err(Error::Jwt(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let issued = Utc::now() - Duration::hours(48);
        let claims = Claims::new("1", "a@b.c", Role::Admin, issued, Duration::hours(24));
        let token = sign_token(&claims, "secret").unwrap();
        assert!(verify_token(&token, "secret").is_err());
    }
}
