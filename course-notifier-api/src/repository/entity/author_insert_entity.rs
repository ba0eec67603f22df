use serde::Serialize;

#[derive(Serialize)]
pub struct AuthorInsertEntity<'a> {
    pub name: &'a str,
}
