use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jwt_auth::error::MissingPermissionError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("course not exist")]
    CourseNotExist,

    #[error("author not exist")]
    AuthorNotExist,

    #[error("user not exist")]
    UserNotExist,

    #[error("role not exist")]
    RoleNotExist,

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("username already taken")]
    UsernameTaken,

    #[error("role name already taken")]
    RoleNameTaken,

    #[error("password hashing error: {0}")]
    PasswordHash(String),

    #[error("auth error: {0}")]
    Auth(#[from] MissingPermissionError),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::CourseNotExist => StatusCode::NOT_FOUND,
            Error::AuthorNotExist => StatusCode::NOT_FOUND,
            Error::UserNotExist => StatusCode::NOT_FOUND,
            Error::RoleNotExist => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::UsernameTaken => StatusCode::CONFLICT,
            Error::RoleNameTaken => StatusCode::CONFLICT,
            Error::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Auth(_) => StatusCode::FORBIDDEN,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}
