//! Project Catalog — the read-only list of portfolio projects.
//!
//! Built once at startup (either the built-in list or a JSON file) and shared
//! behind an `Arc` in `AppState`. Never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::project::Project;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one project")]
    Empty,

    #[error("duplicate project id '{0}'")]
    DuplicateId(String),

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Non-empty, id-unique list of projects in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        if projects.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
        }

        Ok(Self { projects })
    }

    /// The projects shipped with the site.
    pub fn builtin() -> Self {
        Self {
            projects: vec![
                Project::new(
                    "ai-vision",
                    "Neural Vision Suite",
                    "Image classification + interpretability demos.",
                    &["AI", "Computer Vision", "PyTorch"],
                    "dark",
                ),
                Project::new(
                    "ds-dashboard",
                    "DataSense Dashboard",
                    "Interactive analytics with real-time charts.",
                    &["Data Science", "Dashboards", "Pandas"],
                    "purple",
                ),
                Project::new(
                    "automation",
                    "AutoFlow",
                    "Automation pipelines for ETL and orchestration.",
                    &["Automation", "Python", "Airflow"],
                    "green",
                ),
            ],
        }
    }

    /// Parses a JSON array of project records.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> = serde_json::from_str(raw)?;
        Self::new(projects)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&raw)?;
        info!(
            "Loaded {} projects from {}",
            catalog.projects.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Loads from `path` when given, otherwise falls back to the built-in list.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn first(&self) -> &Project {
        // non-empty by construction
        &self.projects[0]
    }
}
