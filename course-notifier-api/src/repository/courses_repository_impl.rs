use super::{
    entity::{CourseFindEntity, CourseInsertEntity},
    inserted_id::inserted_object_id,
    Course, CourseData, CoursesRepository, Error, Transaction,
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt;
use mongodb::{
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};

pub(super) const COURSES: &str = "courses";
const INDEX_NAME_AUTHOR_IDS: &str = "index_author_ids";

pub struct CoursesRepositoryImpl {
    database: Database,
}

impl CoursesRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == COURSES) {
            database.create_collection(COURSES).await?;
            tracing::debug!("created collection {COURSES}");
        }

        let collection = database.collection(COURSES);
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_AUTHOR_IDS.to_string()) {
            Self::create_author_ids_index(&collection).await?;
            tracing::debug!("created index {COURSES}.{INDEX_NAME_AUTHOR_IDS}");
        }

        Ok(Self { database })
    }

    async fn create_author_ids_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "author_ids": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_AUTHOR_IDS.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl CoursesRepository for CoursesRepositoryImpl {
    async fn insert(
        &self,
        transaction: &mut Transaction,
        course: CourseData,
    ) -> Result<Course, Error> {
        let insert_entity = CourseInsertEntity {
            title: &course.title,
            description: &course.description,
            creation_date: &course.creation_date,
            duration: course.duration,
            author_ids: &course.author_ids,
        };

        let collection = self.database.collection::<CourseInsertEntity>(COURSES);
        let action = collection.insert_one(&insert_entity);
        let insert_result = match transaction.session() {
            Some(session) => action.session(session).await,
            None => action.await,
        }
        .map_err(Error::from_write)?;

        let id = inserted_object_id(insert_result)?;

        Ok(Course::new(id, course))
    }

    async fn update(
        &self,
        transaction: &mut Transaction,
        id: ObjectId,
        course: CourseData,
    ) -> Result<Option<Course>, Error> {
        let collection = self.database.collection::<CourseFindEntity>(COURSES);
        let action = collection
            .find_one_and_update(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$set": {
                        "title": course.title.as_str(),
                        "description": course.description.as_str(),
                        "creation_date": course.creation_date.as_str(),
                        "duration": course.duration,
                        "author_ids": course.author_ids.clone(),
                    }
                },
            )
            .return_document(ReturnDocument::After);
        let updated = match transaction.session() {
            Some(session) => action.session(session).await,
            None => action.await,
        }
        .map_err(Error::from_write)?;

        Ok(updated.map(Course::from))
    }

    async fn delete(
        &self,
        transaction: &mut Transaction,
        id: ObjectId,
    ) -> Result<Option<Course>, Error> {
        let collection = self.database.collection::<CourseFindEntity>(COURSES);
        let action = collection.find_one_and_delete(doc! {
            "_id": id,
        });
        let deleted = match transaction.session() {
            Some(session) => action.session(session).await,
            None => action.await,
        }?;

        Ok(deleted.map(Course::from))
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Course>, Error> {
        let course = self
            .database
            .collection::<CourseFindEntity>(COURSES)
            .find_one(doc! {
                "_id": id,
            })
            .await?;

        Ok(course.map(Course::from))
    }

    async fn find_all(&self) -> Result<Vec<Course>, Error> {
        let courses = self
            .database
            .collection::<CourseFindEntity>(COURSES)
            .find(doc! {})
            .sort(doc! {
                "_id": 1,
            })
            .await?
            .map_ok(Course::from)
            .try_collect()
            .await?;

        Ok(courses)
    }
}
