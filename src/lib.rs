pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::database::user_store::InMemoryUserRepository;
use crate::dto::user_dto::UserResponse;
use crate::error::{Error, Result};
use crate::models::user::{seed_users, ADMIN_USER_ID};
use crate::services::{
    auth_service::AuthService, catalog_service::CatalogService, user_service::UserService,
};

pub use crate::routes::build_router;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub catalog_service: CatalogService,
}

impl AppState {
    /// Seeds a fresh in-memory user store and hashes the admin password.
    pub fn new(config: Config) -> Result<Self> {
        let seed = seed_users(&config.admin_email, utils::time::now());
        let admin = seed
            .iter()
            .find(|u| u.id == ADMIN_USER_ID)
            .cloned()
            .ok_or_else(|| Error::Internal("admin seed record missing".to_string()))?;

        let auth_service = AuthService::new(&config, &admin)?;
        let catalog_service = CatalogService::new(UserResponse::from(admin));
        let user_service = UserService::new(Arc::new(InMemoryUserRepository::new(seed)));

        Ok(Self {
            config: Arc::new(config),
            auth_service,
            user_service,
            catalog_service,
        })
    }
}
