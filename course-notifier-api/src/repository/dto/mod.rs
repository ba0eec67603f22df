mod author;
mod course;
mod role;
mod user;

pub use author::*;
pub use course::*;
pub use role::*;
pub use user::*;
