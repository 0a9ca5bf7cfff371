//! Presentation projection for the repository showcase

use chrono::{DateTime, Utc};
use serde::Serialize;

use folio_common::format_date;
use folio_github::RepoSummary;

/// Topics shown on a card before the overflow count takes over
pub const MAX_TOPICS: usize = 5;

/// Badge color for a repository's primary language
pub fn language_color(language: Option<&str>) -> &'static str {
    let Some(language) = language else {
        return "#6b7280";
    };

    match language {
        "JavaScript" => "#f7df1e",
        "TypeScript" => "#3178c6",
        "Python" => "#3776ab",
        "Java" => "#f89820",
        "Kotlin" => "#7f52ff",
        "Dart" => "#0175c2",
        "PHP" => "#777bb4",
        "HTML" => "#e34f26",
        "CSS" => "#1572b6",
        "Shell" => "#89e051",
        "Go" => "#00add8",
        "Rust" => "#000000",
        "Swift" => "#fa7343",
        "C++" => "#00599c",
        "C" => "#a8b9cc",
        "Ruby" => "#cc342d",
        _ => "#8b5cf6",
    }
}

/// Repository card as presented on the showcase page
#[derive(Debug, Clone, Serialize)]
pub struct RepoView {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub html_url: String,
    pub stars: i64,
    pub language: Option<String>,
    pub language_color: &'static str,
    /// Up to `MAX_TOPICS` topics
    pub topics: Vec<String>,
    /// Number of topics hidden behind the overflow badge
    pub more_topics: usize,
    pub updated_at: DateTime<Utc>,
    pub updated_label: String,
}

impl From<RepoSummary> for RepoView {
    fn from(repo: RepoSummary) -> Self {
        let language_color = language_color(repo.language.as_deref());
        let more_topics = repo.topics.len().saturating_sub(MAX_TOPICS);
        let mut topics = repo.topics;
        topics.truncate(MAX_TOPICS);

        Self {
            id: repo.id,
            name: repo.name,
            full_name: repo.full_name,
            description: repo
                .description
                .unwrap_or_else(|| "No description available".to_string()),
            html_url: repo.html_url,
            stars: repo.stargazers_count,
            language: repo.language,
            language_color,
            topics,
            more_topics,
            updated_at: repo.updated_at,
            updated_label: format_date(repo.updated_at),
        }
    }
}
