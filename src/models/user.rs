use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: String,  // server-assigned, YYYYMMDDHHMMSS
    pub username: String,
    pub email: String,
}

/// Body of `POST /users`. Missing fields default to empty strings; an `id`
/// sent by the client is accepted and then discarded.
#[derive(Debug, Deserialize, Default, ToSchema)]
#[serde(default)]
pub struct CreateUserRequest {
    pub id: Option<String>,
    pub username: String,
    pub email: String,
}

impl CreateUserRequest {
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
        }
    }
}
