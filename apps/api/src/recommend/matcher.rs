//! Recommendation Matcher — picks the catalog project that best fits a visitor's intent.
//!
//! Algorithm (all matching is substring containment on lower-cased text):
//! 1. For each `VOCABULARY` word found in both the intent and the project text
//!    (tags + title + summary) → +`KEYWORD_WEIGHT`
//! 2. For each project tag found in the intent → +`TAG_WEIGHT`
//! 3. Highest score wins; ties go to the earliest catalog entry.

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::models::project::Project;

pub const VOCABULARY: [&str; 8] = [
    "vision",
    "image",
    "ml",
    "automation",
    "etl",
    "dashboard",
    "data",
    "pandas",
];
pub const KEYWORD_WEIGHT: u32 = 2;
pub const TAG_WEIGHT: u32 = 1;

#[derive(Debug, Clone)]
pub struct ScoredProject<'a> {
    pub project: &'a Project,
    pub score: u32,
}

/// Lower-cased blob of everything the vocabulary is matched against.
fn project_text(project: &Project) -> String {
    format!(
        "{} {} {}",
        project.tags.join(" "),
        project.title,
        project.summary
    )
    .to_lowercase()
}

/// Scores one project against an already lower-cased intent.
pub fn score_project(project: &Project, intent: &str) -> u32 {
    let text = project_text(project);

    let keyword_score: u32 = VOCABULARY
        .iter()
        .filter(|word| intent.contains(*word) && text.contains(*word))
        .map(|_| KEYWORD_WEIGHT)
        .sum();

    let tag_score: u32 = project
        .tags
        .iter()
        .filter(|tag| intent.contains(&tag.to_lowercase()))
        .map(|_| TAG_WEIGHT)
        .sum();

    keyword_score + tag_score
}

/// All projects with their scores, best first. Equal scores keep catalog order.
pub fn rank<'a>(catalog: &'a Catalog, intent: &str) -> Vec<ScoredProject<'a>> {
    let intent = intent.to_lowercase();

    let mut scored: Vec<ScoredProject<'a>> = catalog
        .projects()
        .iter()
        .map(|project| ScoredProject {
            project,
            score: score_project(project, &intent),
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Returns the single best project for `intent`. Never "no match": a zero score
/// everywhere yields the first catalog entry. Only the empty string is rejected.
pub fn recommend<'a>(catalog: &'a Catalog, intent: &str) -> Result<ScoredProject<'a>, AppError> {
    if intent.is_empty() {
        return Err(AppError::Validation("no intent provided".to_string()));
    }

    let best = rank(catalog, intent)
        .into_iter()
        .next()
        .unwrap_or(ScoredProject {
            project: catalog.first(),
            score: 0,
        });

    Ok(best)
}
