#[derive(Debug, thiserror::Error)]
#[error("missing permission: {missing_permission}")]
pub struct MissingPermissionError {
    pub missing_permission: String,
}
