use crate::repository;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl From<repository::Author> for Author {
    fn from(author: repository::Author) -> Self {
        Self {
            id: author.id.to_hex(),
            name: author.name,
        }
    }
}
