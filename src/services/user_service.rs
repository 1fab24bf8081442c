use std::sync::Arc;

use validator::Validate;

use crate::database::user_store::UserRepository;
use crate::dto::user_dto::{parse_role, parse_status, CreateUserPayload, UpdateUserPayload};
use crate::error::{Error, Result};
use crate::models::user::{NewUser, Role, User, UserStatus};
use crate::utils::crypto::hash_password_blocking;

pub const USER_NOT_FOUND: &str = "User not found";
pub const MISSING_REQUIRED_FIELDS: &str = "Name, email, and password are required";

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub fn list(&self) -> Result<Vec<User>> {
        self.repo.list()
    }

    pub fn get_by_id(&self, id: &str) -> Result<User> {
        self.repo
            .find(id)?
            .ok_or_else(|| Error::NotFound(USER_NOT_FOUND.to_string()))
    }

    pub async fn create(&self, payload: CreateUserPayload) -> Result<User> {
        payload
            .validate()
            .map_err(|_| Error::BadRequest(MISSING_REQUIRED_FIELDS.to_string()))?;

        let (Some(name), Some(email), Some(password)) =
            (payload.name, payload.email, payload.password)
        else {
            return Err(Error::BadRequest(MISSING_REQUIRED_FIELDS.to_string()));
        };

        let role = parse_role(payload.role)?.unwrap_or(Role::Developer);
        let status = parse_status(payload.status)?.unwrap_or(UserStatus::Active);
        let password_hash = hash_password_blocking(password).await?;

        let user = self.repo.insert(NewUser {
            name,
            email,
            phone_number: payload.phone_number.unwrap_or_default(),
            role,
            status,
            password_hash,
        })?;
        tracing::info!(user_id = %user.id, email = %user.email, "User created");
        Ok(user)
    }

    pub async fn update(&self, id: &str, payload: UpdateUserPayload) -> Result<User> {
        if self.repo.find(id)?.is_none() {
            return Err(Error::NotFound(USER_NOT_FOUND.to_string()));
        }
        let (mut changes, password) = payload.into_changes()?;
        if let Some(password) = password {
            changes.password_hash = Some(hash_password_blocking(password).await?);
        }

        let user = self
            .repo
            .update(id, changes)?
            .ok_or_else(|| Error::NotFound(USER_NOT_FOUND.to_string()))?;
        tracing::info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    pub fn delete(&self, id: &str) -> Result<User> {
        let user = self
            .repo
            .remove(id)?
            .ok_or_else(|| Error::NotFound(USER_NOT_FOUND.to_string()))?;
        tracing::info!(user_id = %user.id, "User deleted");
        Ok(user)
    }
}
