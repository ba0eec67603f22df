use super::Error;
use bson::{oid::ObjectId, Bson};
use mongodb::{error::ErrorKind, results::InsertOneResult};
use std::sync::Arc;

pub fn inserted_object_id(insert_result: InsertOneResult) -> Result<ObjectId, Error> {
    let Bson::ObjectId(id) = insert_result.inserted_id else {
        tracing::error!("invalid type of inserted '_id'");
        return Err(Error::Mongo(
            ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
        ));
    };

    Ok(id)
}
