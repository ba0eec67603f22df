#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("invalid id type of inserted document")]
    InsertedIdType,
}
