use std::{ops::Deref, sync::Arc};
use uuid::Uuid;

///
/// Authenticated user.
///
/// Cloned for every request that passes through the auth layer,
/// so the fields live behind an Arc and are reachable through Deref.
///
#[derive(Debug, Clone)]
pub struct User {
    inner: Arc<InnerUser>,
}

#[derive(Debug)]
pub struct InnerUser {
    pub id: Uuid,
    pub username: Option<String>,
    pub permissions: Vec<String>,
}

impl User {
    pub fn new(id: Uuid, username: Option<String>, permissions: Vec<String>) -> Self {
        Self {
            inner: Arc::new(InnerUser {
                id,
                username,
                permissions,
            }),
        }
    }

    ///
    /// Name identifying the user in audit records.
    /// Falls back to the token subject when no username was issued.
    ///
    pub fn principal(&self) -> String {
        match &self.username {
            Some(username) => username.clone(),
            None => self.id.to_string(),
        }
    }
}

impl Deref for User {
    type Target = InnerUser;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn principal_username() {
        let user = User::new(Uuid::new_v4(), Some("alice".to_string()), Vec::new());

        assert_eq!(user.principal(), "alice");
    }

    #[test]
    fn principal_without_username() {
        let id = Uuid::from_u128(7);
        let user = User::new(id, None, Vec::new());

        assert_eq!(user.principal(), id.to_string());
    }
}
