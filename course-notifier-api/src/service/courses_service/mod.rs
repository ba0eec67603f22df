mod courses_service;
mod courses_service_impl;

pub use courses_service::*;
pub use courses_service_impl::*;
