use chrono::Duration;

use crate::config::Config;
use crate::dto::auth_dto::{LoginPayload, LoginResponse, SessionUser};
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::crypto::{hash_password, verify_password_blocking};
use crate::utils::time::now;
use crate::utils::token::{sign_token, verify_token, Claims};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login against the single configured admin account.
#[derive(Clone)]
pub struct AuthService {
    admin: SessionUser,
    admin_password_hash: String,
    jwt_secret: String,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(config: &Config, admin: &User) -> Result<Self> {
        Ok(Self {
            admin: SessionUser::from(admin),
            admin_password_hash: hash_password(&config.admin_password)?,
            jwt_secret: config.jwt_secret.clone(),
            token_ttl: config.token_ttl()?,
        })
    }

    pub async fn login(&self, payload: LoginPayload) -> Result<LoginResponse> {
        let email = payload.email.unwrap_or_default();
        tracing::info!(email = %email, "Login attempt");

        if email != self.admin.email {
            tracing::warn!(email = %email, "Login rejected: unknown email");
            return Err(Error::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let password = payload.password.unwrap_or_default();
        if !verify_password_blocking(password, self.admin_password_hash.clone()).await? {
            tracing::warn!(email = %email, "Login rejected: wrong password");
            return Err(Error::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let claims = Claims::new(
            self.admin.id.clone(),
            self.admin.email.clone(),
            self.admin.role,
            now(),
            self.token_ttl,
        );
        let token = sign_token(&claims, &self.jwt_secret)?;
        tracing::info!(user_id = %self.admin.id, "Login succeeded");

        Ok(LoginResponse {
            token,
            user: self.admin.clone(),
        })
    }

    pub fn verify(&self, token: &str) -> Result<Claims> {
        verify_token(token, &self.jwt_secret).map_err(|err| {
            tracing::debug!(error = %err, "Token verification failed");
            Error::Unauthorized("invalid_token".to_string())
        })
    }
}
