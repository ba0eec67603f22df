use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Claims {
    pub sub: Uuid,

    #[serde(default)]
    pub preferred_username: Option<String>,

    pub realm_access: ClaimsRealmAccess,
}

///
/// Permissions are granted to the user as realm roles
///
#[derive(Deserialize)]
pub struct ClaimsRealmAccess {
    pub roles: Vec<String>,
}
