use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Author {
    pub name: String,
}
