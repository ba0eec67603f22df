use super::{
    courses_repository_impl::COURSES,
    entity::{AuthorFindEntity, AuthorInsertEntity},
    inserted_id::inserted_object_id,
    Author, AuthorsRepository, Error, Transaction,
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt;
use mongodb::{options::ReturnDocument, Database};

const AUTHORS: &str = "authors";

pub struct AuthorsRepositoryImpl {
    database: Database,
}

impl AuthorsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == AUTHORS) {
            database.create_collection(AUTHORS).await?;
            tracing::debug!("created collection {AUTHORS}");
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl AuthorsRepository for AuthorsRepositoryImpl {
    async fn insert(&self, transaction: &mut Transaction, name: &str) -> Result<Author, Error> {
        let insert_entity = AuthorInsertEntity { name };

        let collection = self.database.collection::<AuthorInsertEntity>(AUTHORS);
        let action = collection.insert_one(&insert_entity);
        let insert_result = match transaction.session() {
            Some(session) => action.session(session).await,
            None => action.await,
        }
        .map_err(Error::from_write)?;

        let id = inserted_object_id(insert_result)?;

        Ok(Author {
            id,
            name: name.to_string(),
        })
    }

    async fn update(
        &self,
        transaction: &mut Transaction,
        id: ObjectId,
        name: &str,
    ) -> Result<Option<Author>, Error> {
        let collection = self.database.collection::<AuthorFindEntity>(AUTHORS);
        let action = collection
            .find_one_and_update(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$set": {
                        "name": name,
                    }
                },
            )
            .return_document(ReturnDocument::After);
        let updated = match transaction.session() {
            Some(session) => action.session(session).await,
            None => action.await,
        }
        .map_err(Error::from_write)?;

        Ok(updated.map(Author::from))
    }

    async fn delete(
        &self,
        transaction: &mut Transaction,
        id: ObjectId,
    ) -> Result<Option<Author>, Error> {
        let collection = self.database.collection::<AuthorFindEntity>(AUTHORS);
        let action = collection.find_one_and_delete(doc! {
            "_id": id,
        });
        let deleted = match transaction.session() {
            Some(session) => action.session(session).await,
            None => action.await,
        }?;

        let Some(deleted) = deleted else {
            return Ok(None);
        };

        let courses = self.database.collection::<Document>(COURSES);
        let action = courses.update_many(
            doc! {
                "author_ids": id,
            },
            doc! {
                "$pull": {
                    "author_ids": id,
                }
            },
        );
        let update_result = match transaction.session() {
            Some(session) => action.session(session).await,
            None => action.await,
        }?;
        tracing::debug!(
            courses = update_result.modified_count,
            "removed deleted author from courses"
        );

        Ok(Some(Author::from(deleted)))
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Author>, Error> {
        let author = self
            .database
            .collection::<AuthorFindEntity>(AUTHORS)
            .find_one(doc! {
                "_id": id,
            })
            .await?;

        Ok(author.map(Author::from))
    }

    async fn find_all(&self) -> Result<Vec<Author>, Error> {
        let authors = self
            .database
            .collection::<AuthorFindEntity>(AUTHORS)
            .find(doc! {})
            .sort(doc! {
                "_id": 1,
            })
            .await?
            .map_ok(Author::from)
            .try_collect()
            .await?;

        Ok(authors)
    }

    async fn count_existing(&self, ids: &[ObjectId]) -> Result<u64, Error> {
        let count = self
            .database
            .collection::<Document>(AUTHORS)
            .count_documents(doc! {
                "_id": {
                    "$in": ids.to_vec(),
                }
            })
            .await?;

        Ok(count)
    }
}
