use crate::repository;
use serde::Serialize;

///
/// User without password hash
///
#[derive(Debug, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub roles: Vec<String>,
}

impl From<repository::User> for User {
    fn from(user: repository::User) -> Self {
        Self {
            id: user.id.to_hex(),
            username: user.username,
            roles: user.roles,
        }
    }
}
