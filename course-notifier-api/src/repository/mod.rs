mod authors_repository;
mod authors_repository_impl;
mod courses_repository;
mod courses_repository_impl;
mod dto;
mod entity;
mod error;
mod inserted_id;
mod roles_repository;
mod roles_repository_impl;
mod transaction;
mod transaction_manager;
mod transaction_manager_impl;
mod users_repository;
mod users_repository_impl;


pub use authors_repository::*;
pub use authors_repository_impl::*;
pub use courses_repository::*;
pub use courses_repository_impl::*;
pub use dto::*;
pub use error::*;
pub use roles_repository::*;
pub use roles_repository_impl::*;
pub use transaction::*;
pub use transaction_manager::*;
pub use transaction_manager_impl::*;
pub use users_repository::*;
pub use users_repository_impl::*;
