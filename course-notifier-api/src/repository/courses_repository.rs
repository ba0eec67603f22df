use super::{Course, CourseData, Error, Transaction};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoursesRepository: Send + Sync {
    async fn insert(
        &self,
        transaction: &mut Transaction,
        course: CourseData,
    ) -> Result<Course, Error>;

    ///
    /// Replaces all course fields.
    ///
    /// ### Returns
    /// Updated course or None when course does not exist
    ///
    async fn update(
        &self,
        transaction: &mut Transaction,
        id: ObjectId,
        course: CourseData,
    ) -> Result<Option<Course>, Error>;

    ///
    /// ### Returns
    /// Deleted course or None when course does not exist
    ///
    async fn delete(
        &self,
        transaction: &mut Transaction,
        id: ObjectId,
    ) -> Result<Option<Course>, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Course>, Error>;

    async fn find_all(&self) -> Result<Vec<Course>, Error>;
}
