use super::{
    entity::{UserFindEntity, UserInsertEntity},
    inserted_id::inserted_object_id,
    Error, Transaction, User, UsersRepository,
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt;
use mongodb::{
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};

const USERS: &str = "users";
const INDEX_NAME_UNIQUE_USERNAME: &str = "unique_index_username";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == USERS) {
            database.create_collection(USERS).await?;
            tracing::debug!("created collection {USERS}");
        }

        let collection = database.collection(USERS);
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_USERNAME.to_string()) {
            Self::create_unique_username_index(&collection).await?;
            tracing::debug!("created index {USERS}.{INDEX_NAME_UNIQUE_USERNAME}");
        }

        Ok(Self { database })
    }

    async fn create_unique_username_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "username": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_UNIQUE_USERNAME.to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn insert(
        &self,
        transaction: &mut Transaction,
        username: &str,
        password_hash: &str,
        roles: &[String],
    ) -> Result<User, Error> {
        let insert_entity = UserInsertEntity {
            username,
            password_hash,
            roles,
        };

        let collection = self.database.collection::<UserInsertEntity>(USERS);
        let action = collection.insert_one(&insert_entity);
        let insert_result = match transaction.session() {
            Some(session) => action.session(session).await,
            None => action.await,
        }
        .map_err(Error::from_write)?;

        let id = inserted_object_id(insert_result)?;

        Ok(User {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            roles: roles.to_vec(),
        })
    }

    async fn update(
        &self,
        transaction: &mut Transaction,
        id: ObjectId,
        username: &str,
        password_hash: Option<String>,
        roles: &[String],
    ) -> Result<Option<User>, Error> {
        let mut set = doc! {
            "username": username,
            "roles": roles.to_vec(),
        };
        if let Some(password_hash) = password_hash {
            set.insert("password_hash", password_hash);
        }

        let collection = self.database.collection::<UserFindEntity>(USERS);
        let action = collection
            .find_one_and_update(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$set": set,
                },
            )
            .return_document(ReturnDocument::After);
        let updated = match transaction.session() {
            Some(session) => action.session(session).await,
            None => action.await,
        }
        .map_err(Error::from_write)?;

        Ok(updated.map(User::from))
    }

    async fn delete(
        &self,
        transaction: &mut Transaction,
        id: ObjectId,
    ) -> Result<Option<User>, Error> {
        let collection = self.database.collection::<UserFindEntity>(USERS);
        let action = collection.find_one_and_delete(doc! {
            "_id": id,
        });
        let deleted = match transaction.session() {
            Some(session) => action.session(session).await,
            None => action.await,
        }?;

        Ok(deleted.map(User::from))
    }

    async fn find(&self, id: ObjectId) -> Result<Option<User>, Error> {
        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! {
                "_id": id,
            })
            .await?;

        Ok(user.map(User::from))
    }

    async fn find_all(&self) -> Result<Vec<User>, Error> {
        let users = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find(doc! {})
            .sort(doc! {
                "_id": 1,
            })
            .await?
            .map_ok(User::from)
            .try_collect()
            .await?;

        Ok(users)
    }
}
