use crate::auth::Permission;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Role {
    pub name: String,

    #[serde(default)]
    pub permissions: Vec<Permission>,
}
