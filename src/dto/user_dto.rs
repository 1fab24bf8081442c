use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::user::{Role, User, UserChanges, UserStatus};
use crate::utils::validation::non_blank;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserPayload {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            phone_number: value.phone_number,
            role: value.role,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

pub fn parse_role(raw: Option<String>) -> Result<Option<Role>> {
    non_blank(raw)
        .map(|value| value.parse::<Role>().map_err(Error::BadRequest))
        .transpose()
}

pub fn parse_status(raw: Option<String>) -> Result<Option<UserStatus>> {
    non_blank(raw)
        .map(|value| value.parse::<UserStatus>().map_err(Error::BadRequest))
        .transpose()
}

impl UpdateUserPayload {
    /// Blank strings are treated as absent so they keep the stored value.
    /// The password is returned separately because it still needs hashing.
    pub fn into_changes(self) -> Result<(UserChanges, Option<String>)> {
        let changes = UserChanges {
            name: non_blank(self.name),
            email: non_blank(self.email),
            phone_number: non_blank(self.phone_number),
            role: parse_role(self.role)?,
            status: parse_status(self.status)?,
            password_hash: None,
        };
        Ok((changes, non_blank(self.password)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn create_payload_requires_password() {
        let payload = CreateUserPayload {
            name: Some("Jane".into()),
            email: Some("jane@x.com".into()),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn create_payload_rejects_empty_name() {
        let payload = CreateUserPayload {
            name: Some(String::new()),
            email: Some("jane@x.com".into()),
            password: Some("pw".into()),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_payload_ignores_blank_fields() {
        let payload = UpdateUserPayload {
            name: Some("  ".into()),
            phone_number: Some("555-0100".into()),
            role: Some(String::new()),
            ..Default::default()
        };
        let (changes, password) = payload.into_changes().unwrap();
        assert_eq!(changes.name, None);
        assert_eq!(changes.role, None);
        assert_eq!(changes.phone_number.as_deref(), Some("555-0100"));
        assert_eq!(password, None);
    }

    #[test]
    fn update_payload_rejects_unknown_status() {
        let payload = UpdateUserPayload {
            status: Some("Suspended".into()),
            ..Default::default()
        };
        let err = payload.into_changes().unwrap_err();
        assert!(matches!(err, Error::BadRequest(msg) if msg == "Invalid status: Suspended"));
    }

    #[test]
    fn response_omits_password_hash_and_uses_camel_case() {
        let user = crate::models::user::seed_users("admin@example.com", Utc::now()).remove(0);
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["phoneNumber"], "");
        assert_eq!(json["role"], "Admin");
        assert!(json.get("updatedAt").is_none());
    }
}
