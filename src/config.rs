use crate::error::{Error, Result};
use chrono::Duration;
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_JWT_SECRET: &str = "fallback-secret-key";
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;
/// One year.
pub const MAX_JWT_EXPIRY_HOURS: i64 = 24 * 365;
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Origins the front end is deployed on. Extended by `CORS_ALLOWED_ORIGINS`.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = [
    "https://tubular-syrnki-3cb15e.netlify.app",
    "http://localhost:5173",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub admin_email: String,
    pub admin_password: String,
    pub allowed_origins: Vec<String>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            jwt_expiry_hours: DEFAULT_JWT_EXPIRY_HOURS,
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default();
        let mut allowed_origins = defaults.allowed_origins;
        if let Ok(raw) = env::var("CORS_ALLOWED_ORIGINS") {
            allowed_origins.extend(parse_origin_list(&raw));
        }

        let config = Self {
            port: get_env_parse_or("PORT", defaults.port)?,
            jwt_secret: get_env_or("JWT_SECRET", defaults.jwt_secret),
            jwt_expiry_hours: get_env_parse_or("JWT_EXPIRY_HOURS", defaults.jwt_expiry_hours)?,
            admin_email: get_env_or("ADMIN_EMAIL", defaults.admin_email),
            admin_password: get_env_or("ADMIN_PASSWORD", defaults.admin_password),
            allowed_origins,
        };
        config.token_ttl()?;
        Ok(config)
    }

    /// Token lifetime, restricted to `1..=MAX_JWT_EXPIRY_HOURS` hours.
    pub fn token_ttl(&self) -> Result<Duration> {
        let hours = self.jwt_expiry_hours;
        if !(1..=MAX_JWT_EXPIRY_HOURS).contains(&hours) {
            return Err(Error::Config(format!(
                "Invalid value for JWT_EXPIRY_HOURS: {} (expected 1..={})",
                hours, MAX_JWT_EXPIRY_HOURS
            )));
        }
        Duration::try_hours(hours).ok_or_else(|| {
            Error::Config(format!("Invalid value for JWT_EXPIRY_HOURS: {}", hours))
        })
    }

    pub fn server_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn get_env_or(name: &str, default: String) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default,
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
