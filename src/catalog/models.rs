use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BirdImage {
    pub category: String,
    pub path: String,
    pub author: String,
}

impl BirdImage {
    pub fn new(category: &str, path: &str, author: &str) -> Self {
        Self {
            category: category.to_string(),
            path: path.to_string(),
            author: author.to_string(),
        }
    }
}
