use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use jwt_auth::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersService: Send + Sync {
    ///
    /// Creates user with Argon2 hashed password.
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - username or password is blank
    ///     - any role does not exist
    /// - [Error::UsernameTaken] when username is already used
    ///
    async fn create_user(&self, user: &User, new_user: input::User)
        -> Result<output::User, Error>;

    ///
    /// Updates user. Blank password keeps the current one.
    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user does not exist
    /// - [Error::Validation] when
    ///     - username is blank
    ///     - any role does not exist
    /// - [Error::UsernameTaken] when username is already used
    ///
    async fn update_user(
        &self,
        user: &User,
        id: &str,
        updated_user: input::User,
    ) -> Result<output::User, Error>;

    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user does not exist
    ///
    async fn delete_user(&self, user: &User, id: &str) -> Result<(), Error>;

    async fn find_user(&self, id: &str) -> Result<output::User, Error>;

    async fn find_users(&self) -> Result<Vec<output::User>, Error>;
}
