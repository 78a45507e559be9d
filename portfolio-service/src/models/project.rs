use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub image: String,
    pub github_url: String,
    /// Empty when the project has no live deployment.
    pub website_url: String,
    pub alt: String,
    pub status: ProjectStatus,
    pub order: i32,
}

/// Publication status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Published,
    Draft,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Published => "published",
            ProjectStatus::Draft => "draft",
            ProjectStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_lowercase_string() {
        let json = serde_json::to_value(ProjectStatus::Published).unwrap();
        assert_eq!(json, "published");
        assert_eq!(ProjectStatus::Archived.as_str(), "archived");
    }
}
