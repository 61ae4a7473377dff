use crate::{
    models::{CreateUserRequest, User},
    store::UserStore,
    utils::{timestamp_id, AppError},
};
use chrono::{DateTime, Local};

pub const USER_NOT_FOUND: &str = "User not found";

pub fn list_users(store: &UserStore) -> Vec<User> {
    store.list()
}

pub fn get_user(store: &UserStore, id: &str) -> Result<User, AppError> {
    store
        .get(id)
        .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
}

/// Stores a new user under an id derived from `now`.
///
/// Ids have second resolution: a second create within the same second
/// replaces the first record.
pub fn create_user(store: &UserStore, request: CreateUserRequest, now: DateTime<Local>) -> User {
    let user = request.into_user(timestamp_id(&now));

    if let Some(previous) = store.insert(user.clone()) {
        log::warn!(
            "⚠️  User id {} reused, replaced record for {}",
            previous.id,
            previous.username
        );
    }

    user
}
