//! In-memory user repository adapter.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

/// Process-local [`UserRepository`] assigning sequential identifiers.
///
/// Identifiers start at 1 and every save appends; nothing is deduplicated.
/// Safe for concurrent use from multiple request tasks.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    next_id: AtomicI64,
    records: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record saved so far, in insertion order.
    pub fn records(&self) -> Vec<User> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let user = User::new(id, user.into_name());
        let mut records = self
            .records
            .lock()
            .map_err(|_| UserPersistenceError::query("user store mutex poisoned"))?;
        records.push(user.clone());
        Ok(user)
    }
}
