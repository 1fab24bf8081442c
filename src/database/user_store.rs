use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::models::user::{NewUser, User, UserChanges};
use crate::utils::time::{next_timestamp_id, now};

pub const DUPLICATE_EMAIL: &str = "User with this email already exists";

/// Storage seam for users. Every method is one atomic step over the store.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn list(&self) -> Result<Vec<User>>;

    fn find(&self, id: &str) -> Result<Option<User>>;

    /// Fails with `Error::BadRequest` when the email is already taken.
    fn insert(&self, new: NewUser) -> Result<User>;

    fn update(&self, id: &str, changes: UserChanges) -> Result<Option<User>>;

    fn remove(&self, id: &str) -> Result<Option<User>>;
}

#[derive(Debug)]
struct StoreState {
    users: Vec<User>,
    last_id: i64,
}

/// Process-lifetime user list guarded by one coarse lock.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    state: Mutex<StoreState>,
}

impl InMemoryUserRepository {
    pub fn new(seed: Vec<User>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                users: seed,
                last_id: 0,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>> {
        self.state
            .lock()
            .map_err(|_| Error::Internal("user store lock poisoned".to_string()))
    }

    fn insert_at(&self, new: NewUser, at: DateTime<Utc>) -> Result<User> {
        let mut guard = self.lock()?;
        if guard.users.iter().any(|u| u.email == new.email) {
            return Err(Error::BadRequest(DUPLICATE_EMAIL.to_string()));
        }
        let id = next_timestamp_id(at, guard.last_id);
        guard.last_id = id;
        let user = User::from_new(id.to_string(), new, at);
        guard.users.push(user.clone());
        Ok(user)
    }
}

impl UserRepository for InMemoryUserRepository {
    fn list(&self) -> Result<Vec<User>> {
        Ok(self.lock()?.users.clone())
    }

    fn find(&self, id: &str) -> Result<Option<User>> {
        Ok(self.lock()?.users.iter().find(|u| u.id == id).cloned())
    }

    fn insert(&self, new: NewUser) -> Result<User> {
        self.insert_at(new, now())
    }

    fn update(&self, id: &str, changes: UserChanges) -> Result<Option<User>> {
        let mut guard = self.lock()?;
        let Some(user) = guard.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        user.apply(changes, now());
        Ok(Some(user.clone()))
    }

    fn remove(&self, id: &str) -> Result<Option<User>> {
        let mut guard = self.lock()?;
        let Some(index) = guard.users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };
        Ok(Some(guard.users.remove(index)))
    }
}
