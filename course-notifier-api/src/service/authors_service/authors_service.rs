use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use jwt_auth::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorsService: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::Validation] when name is blank
    ///
    async fn create_author(
        &self,
        user: &User,
        author: input::Author,
    ) -> Result<output::Author, Error>;

    ///
    /// ### Errors
    /// - [Error::AuthorNotExist] when author does not exist
    /// - [Error::Validation] when name is blank
    ///
    async fn update_author(
        &self,
        user: &User,
        id: &str,
        author: input::Author,
    ) -> Result<output::Author, Error>;

    ///
    /// Deletes author, courses lose the author.
    ///
    /// ### Errors
    /// - [Error::AuthorNotExist] when author does not exist
    ///
    async fn delete_author(&self, user: &User, id: &str) -> Result<(), Error>;

    async fn find_author(&self, id: &str) -> Result<output::Author, Error>;

    async fn find_authors(&self) -> Result<Vec<output::Author>, Error>;
}
