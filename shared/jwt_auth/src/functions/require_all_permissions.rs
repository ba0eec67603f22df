use crate::{error::MissingPermissionError, User};

///
/// Validates that user was granted all required permissions.
///
/// ### Errors
/// - [MissingPermissionError] with the first permission that is missing
///
pub fn require_all_permissions<P>(user: &User, permissions: &[P]) -> Result<(), MissingPermissionError>
where
    P: AsRef<str>,
{
    let missing = permissions.iter().map(AsRef::as_ref).find(|permission| {
        !user
            .permissions
            .iter()
            .any(|user_permission| user_permission == permission)
    });

    match missing {
        Some(permission) => Err(MissingPermissionError {
            missing_permission: permission.to_string(),
        }),
        None => Ok(()),
    }
}
