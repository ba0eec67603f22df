use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Course {
    pub title: String,

    #[serde(default)]
    pub description: String,
    pub creation_date: String,

    /// Minutes
    pub duration: i32,

    #[serde(default)]
    pub author_ids: Vec<String>,
}
