mod authors_service;
mod authors_service_impl;

pub use authors_service::*;
pub use authors_service_impl::*;
