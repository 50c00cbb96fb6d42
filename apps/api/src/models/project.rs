use serde::{Deserialize, Serialize};

/// A portfolio project as shown on the home page and returned by the recommender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    /// Styling hint for the front-end only.
    pub theme: String,
}

impl Project {
    pub fn new(id: &str, title: &str, summary: &str, tags: &[&str], theme: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            theme: theme.to_string(),
        }
    }
}
