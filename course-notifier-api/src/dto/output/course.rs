use crate::repository;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub creation_date: String,
    pub duration: i32,
    pub author_ids: Vec<String>,
}

impl From<repository::Course> for Course {
    fn from(course: repository::Course) -> Self {
        Self {
            id: course.id.to_hex(),
            title: course.title,
            description: course.description,
            creation_date: course.creation_date,
            duration: course.duration,
            author_ids: course.author_ids.iter().map(|id| id.to_hex()).collect(),
        }
    }
}
