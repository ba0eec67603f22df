use bson::oid::ObjectId;
use serde::Serialize;

#[derive(Serialize)]
pub struct CourseInsertEntity<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub creation_date: &'a str,
    pub duration: i32,
    pub author_ids: &'a [ObjectId],
}
