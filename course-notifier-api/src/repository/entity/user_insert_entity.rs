use serde::Serialize;

#[derive(Serialize)]
pub struct UserInsertEntity<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub roles: &'a [String],
}
