mod roles_service;
mod roles_service_impl;

pub use roles_service::*;
pub use roles_service_impl::*;
