use super::{
    entity::{RoleFindEntity, RoleInsertEntity},
    inserted_id::inserted_object_id,
    Error, Role, RolesRepository,
};
use crate::auth::Permission;
use axum::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt;
use mongodb::{
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};

const ROLES: &str = "roles";
const INDEX_NAME_UNIQUE_NAME: &str = "unique_index_name";

pub struct RolesRepositoryImpl {
    database: Database,
}

impl RolesRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == ROLES) {
            database.create_collection(ROLES).await?;
            tracing::debug!("created collection {ROLES}");
        }

        let collection = database.collection(ROLES);
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_NAME.to_string()) {
            Self::create_unique_name_index(&collection).await?;
            tracing::debug!("created index {ROLES}.{INDEX_NAME_UNIQUE_NAME}");
        }

        Ok(Self { database })
    }

    async fn create_unique_name_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "name": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_UNIQUE_NAME.to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl RolesRepository for RolesRepositoryImpl {
    async fn insert(&self, name: &str, permissions: &[Permission]) -> Result<Role, Error> {
        let insert_entity = RoleInsertEntity { name, permissions };

        let insert_result = self
            .database
            .collection::<RoleInsertEntity>(ROLES)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_write)?;

        let id = inserted_object_id(insert_result)?;

        Ok(Role {
            id,
            name: name.to_string(),
            permissions: permissions.to_vec(),
        })
    }

    async fn update(
        &self,
        id: ObjectId,
        name: &str,
        permissions: &[Permission],
    ) -> Result<Option<Role>, Error> {
        let permissions = permissions
            .iter()
            .map(|permission| permission.as_ref())
            .collect::<Vec<_>>();

        let updated = self
            .database
            .collection::<RoleFindEntity>(ROLES)
            .find_one_and_update(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$set": {
                        "name": name,
                        "permissions": permissions,
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(Error::from_write)?;

        Ok(updated.map(Role::from))
    }

    async fn delete(&self, id: ObjectId) -> Result<Option<Role>, Error> {
        let deleted = self
            .database
            .collection::<RoleFindEntity>(ROLES)
            .find_one_and_delete(doc! {
                "_id": id,
            })
            .await?;

        Ok(deleted.map(Role::from))
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Role>, Error> {
        let role = self
            .database
            .collection::<RoleFindEntity>(ROLES)
            .find_one(doc! {
                "_id": id,
            })
            .await?;

        Ok(role.map(Role::from))
    }

    async fn find_all(&self) -> Result<Vec<Role>, Error> {
        let roles = self
            .database
            .collection::<RoleFindEntity>(ROLES)
            .find(doc! {})
            .sort(doc! {
                "name": 1,
            })
            .await?
            .map_ok(Role::from)
            .try_collect()
            .await?;

        Ok(roles)
    }

    async fn count_existing_names(&self, names: &[String]) -> Result<u64, Error> {
        let count = self
            .database
            .collection::<Document>(ROLES)
            .count_documents(doc! {
                "name": {
                    "$in": names.to_vec(),
                }
            })
            .await?;

        Ok(count)
    }
}
