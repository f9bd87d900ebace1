use serde::{Deserialize, Serialize};

/// Placeholder shown when the search index has no publication date for a hit.
pub const UNKNOWN_DATE: &str = "날짜 정보 없음";

/// Category assigned to articles the index left uncategorized.
pub const UNCATEGORIZED: &str = "미분류";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub url: String,
    pub published_date: String,
    pub categories: Vec<String>,
    /// Relevance assigned by the search engine. Unit-less, higher is better.
    pub score: f32,
}

/// How the drafter grounds its answer, chosen once per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStrategy {
    /// Retrieval came back empty; answer from general knowledge only.
    NoArticles,
    /// Top hit is a weak match; blend its excerpt with general knowledge.
    Hybrid,
    /// Top hit is a strong match; prefer article content over general knowledge.
    FullContext,
}

impl ResponseStrategy {
    /// Scores at or above this are trusted enough for full-context drafting.
    pub const RELEVANCE_THRESHOLD: f32 = 0.3;

    pub fn select(no_articles: bool, top_score: f32) -> Self {
        if no_articles {
            Self::NoArticles
        } else if top_score < Self::RELEVANCE_THRESHOLD {
            Self::Hybrid
        } else {
            Self::FullContext
        }
    }
}

/// Everything the caller gets back from one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub best_article: Option<Article>,
    pub related_articles: Vec<Article>,
    pub relevance_score: f32,
    pub final_answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_selection() {
        assert_eq!(
            ResponseStrategy::select(true, 0.0),
            ResponseStrategy::NoArticles
        );
        assert_eq!(
            ResponseStrategy::select(false, 0.1),
            ResponseStrategy::Hybrid
        );
        assert_eq!(
            ResponseStrategy::select(false, 0.8),
            ResponseStrategy::FullContext
        );
    }

    #[test]
    fn test_strategy_threshold_boundary() {
        // Exactly at the threshold counts as a strong match.
        assert_eq!(
            ResponseStrategy::select(false, ResponseStrategy::RELEVANCE_THRESHOLD),
            ResponseStrategy::FullContext
        );
        assert_eq!(
            ResponseStrategy::select(false, 0.299),
            ResponseStrategy::Hybrid
        );
    }

    #[test]
    fn test_no_articles_wins_over_score() {
        // An empty result set selects NoArticles regardless of the score passed in.
        assert_eq!(
            ResponseStrategy::select(true, 0.9),
            ResponseStrategy::NoArticles
        );
    }
}
