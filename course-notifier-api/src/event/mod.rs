mod domain_event_publisher;
mod operation_event;
mod operation_event_listener;

pub use domain_event_publisher::*;
pub use operation_event::*;
pub use operation_event_listener::*;
