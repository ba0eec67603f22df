use serde::Deserialize;

#[derive(Deserialize)]
pub struct User {
    pub username: String,

    /// Blank password on update keeps current one
    #[serde(default)]
    pub password: String,

    /// Names of roles
    #[serde(default)]
    pub roles: Vec<String>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("roles", &self.roles)
            .finish_non_exhaustive()
    }
}
