//!
//! All permissions used within application.
//!
//! Permissions arrive in `realm_access.roles` claim of the JWT
//! and are stored by name inside roles.
//!

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    CourseView,
    CourseEdit,
    UserManage,
    RoleManage,
}
