mod permission;

pub use permission::*;
