use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

///
/// Kind of entity whose change is announced.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Course,
    Author,
    User,
}

impl EntityType {
    /// Capitalized name used in human readable messages
    pub fn label(&self) -> &'static str {
        match self {
            EntityType::Course => "Course",
            EntityType::Author => "Author",
            EntityType::User => "User",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn as_ref_matches_wire_value() {
        assert_eq!(EntityType::Course.as_ref(), "COURSE");
        assert_eq!(EntityType::Author.as_ref(), "AUTHOR");
        assert_eq!(EntityType::User.as_ref(), "USER");
    }

    #[test]
    fn from_str_unknown_value() {
        assert!(EntityType::from_str("ROLE").is_err());
    }
}
