use crate::auth::Permission;
use serde::Serialize;

#[derive(Serialize)]
pub struct RoleInsertEntity<'a> {
    pub name: &'a str,
    pub permissions: &'a [Permission],
}
