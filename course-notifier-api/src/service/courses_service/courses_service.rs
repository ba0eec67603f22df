use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use jwt_auth::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoursesService: Send + Sync {
    ///
    /// Creates course and announces it after commit.
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - title is blank
    ///     - duration is negative
    ///     - any author does not exist
    ///
    async fn create_course(
        &self,
        user: &User,
        course: input::Course,
    ) -> Result<output::Course, Error>;

    ///
    /// Replaces course and announces it after commit.
    ///
    /// ### Errors
    /// - [Error::CourseNotExist] when course does not exist
    /// - [Error::Validation] same as in [CoursesService::create_course]
    ///
    async fn update_course(
        &self,
        user: &User,
        id: &str,
        course: input::Course,
    ) -> Result<output::Course, Error>;

    ///
    /// Deletes course and announces it after commit.
    ///
    /// ### Errors
    /// - [Error::CourseNotExist] when course does not exist
    ///
    async fn delete_course(&self, user: &User, id: &str) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::CourseNotExist] when course does not exist
    ///
    async fn find_course(&self, id: &str) -> Result<output::Course, Error>;

    async fn find_courses(&self) -> Result<Vec<output::Course>, Error>;
}
