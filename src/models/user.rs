use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Admin,
    #[serde(rename = "Project Manager")]
    ProjectManager,
    Developer,
    Tester,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::ProjectManager => "Project Manager",
            Role::Developer => "Developer",
            Role::Tester => "Tester",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Admin" => Ok(Role::Admin),
            "Project Manager" | "ProjectManager" => Ok(Role::ProjectManager),
            "Developer" => Ok(Role::Developer),
            "Tester" => Ok(Role::Tester),
            other => Err(format!("Invalid role: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Active" => Ok(UserStatus::Active),
            "Inactive" => Ok(UserStatus::Inactive),
            other => Err(format!("Invalid status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub role: Role,
    pub status: UserStatus,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A user as submitted for creation, before the store assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub role: Role,
    pub status: UserStatus,
    pub password_hash: String,
}

/// Partial overwrite of a stored user. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
    pub password_hash: Option<String>,
}

impl User {
    pub fn from_new(id: String, new: NewUser, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone_number: new.phone_number,
            role: new.role,
            status: new.status,
            password_hash: Some(new.password_hash),
            created_at: now,
            updated_at: None,
        }
    }

    pub fn apply(&mut self, changes: UserChanges, now: DateTime<Utc>) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(phone_number) = changes.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(role) = changes.role {
            self.role = role;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(password_hash) = changes.password_hash {
            self.password_hash = Some(password_hash);
        }
        self.updated_at = Some(now);
    }
}

pub const ADMIN_USER_ID: &str = "1";

/// Records present in the store when the process starts.
pub fn seed_users(admin_email: &str, now: DateTime<Utc>) -> Vec<User> {
    vec![
        User {
            id: ADMIN_USER_ID.to_string(),
            name: "Admin User".to_string(),
            email: admin_email.to_string(),
            phone_number: String::new(),
            role: Role::Admin,
            status: UserStatus::Active,
            password_hash: None,
            created_at: now,
            updated_at: None,
        },
        User {
            id: "2".to_string(),
            name: "Developer User".to_string(),
            email: "developer@example.com".to_string(),
            phone_number: String::new(),
            role: Role::Developer,
            status: UserStatus::Active,
            password_hash: None,
            created_at: now,
            updated_at: None,
        },
    ]
}
