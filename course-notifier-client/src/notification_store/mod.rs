mod notification;
mod notification_store;

pub use notification::*;
pub use notification_store::*;
