mod author_find_entity;
mod author_insert_entity;
mod course_find_entity;
mod course_insert_entity;
mod role_find_entity;
mod role_insert_entity;
mod user_find_entity;
mod user_insert_entity;

pub use author_find_entity::*;
pub use author_insert_entity::*;
pub use course_find_entity::*;
pub use course_insert_entity::*;
pub use role_find_entity::*;
pub use role_insert_entity::*;
pub use user_find_entity::*;
pub use user_insert_entity::*;
