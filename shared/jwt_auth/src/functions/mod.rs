mod require_all_permissions;

pub use require_all_permissions::require_all_permissions;
