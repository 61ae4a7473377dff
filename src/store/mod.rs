use crate::models::User;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// In-memory user store owned by the user-service process.
///
/// Handlers run on several actix workers, so the map sits behind a
/// `RwLock`: list/get take the read side, create takes the write side.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored user, in no particular order.
    pub fn list(&self) -> Vec<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.get(id).cloned()
    }

    /// Inserts `user` under its id and returns the record it replaced, if any.
    pub fn insert(&self, user: User) -> Option<User> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        users.insert(user.id.clone(), user)
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
