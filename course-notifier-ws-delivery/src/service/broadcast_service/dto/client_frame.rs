use serde::Deserialize;

///
/// Text frame sent by the client to manage its subscription
///
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientFrame {
    Subscribe { topic: String },
    Unsubscribe { topic: String },
}
