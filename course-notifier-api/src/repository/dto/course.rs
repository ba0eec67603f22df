use super::super::entity::CourseFindEntity;
use bson::oid::ObjectId;

#[derive(Debug, Clone)]
pub struct Course {
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub creation_date: String,
    pub duration: i32,
    pub author_ids: Vec<ObjectId>,
}

///
/// Course fields written by insert and update
///
#[derive(Debug, Clone, PartialEq)]
pub struct CourseData {
    pub title: String,
    pub description: String,
    pub creation_date: String,
    pub duration: i32,
    pub author_ids: Vec<ObjectId>,
}

impl Course {
    pub fn new(id: ObjectId, data: CourseData) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            creation_date: data.creation_date,
            duration: data.duration,
            author_ids: data.author_ids,
        }
    }
}

impl From<CourseFindEntity> for Course {
    fn from(entity: CourseFindEntity) -> Self {
        Self {
            id: entity._id,
            title: entity.title,
            description: entity.description,
            creation_date: entity.creation_date,
            duration: entity.duration,
            author_ids: entity.author_ids,
        }
    }
}
