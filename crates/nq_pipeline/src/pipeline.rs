use nq_core::{ArticleSearch, PipelineResult, Result};
use nq_inference::Gateway;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

use crate::draft::Drafter;
use crate::prompts;
use crate::review::Reviewer;

const DEFAULT_SEARCH_LIMIT: usize = 7;

/// The one entry point the front end calls: search, draft, review, assemble.
pub struct Pipeline {
    search: Arc<dyn ArticleSearch>,
    drafter: Drafter,
    reviewer: Reviewer,
    search_limit: usize,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("search", &"<dyn ArticleSearch>")
            .field("search_limit", &self.search_limit)
            .finish()
    }
}

impl Pipeline {
    pub fn new(search: Arc<dyn ArticleSearch>, gateway: Arc<Gateway>) -> Self {
        Self {
            search,
            drafter: Drafter::new(gateway.clone()),
            reviewer: Reviewer::new(gateway),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    /// Always returns a well-formed result. A failure anywhere in the
    /// sequence collapses to the fixed error answer; the caller never sees
    /// an error cross this boundary.
    pub async fn process(&self, query: &str, provider_name: &str) -> PipelineResult {
        match self.run(query, provider_name).await {
            Ok(result) => result,
            Err(e) => {
                error!("❌ Query pipeline failed: {}", e);
                PipelineResult {
                    best_article: None,
                    related_articles: Vec::new(),
                    relevance_score: 0.0,
                    final_answer: prompts::PIPELINE_ERROR.to_string(),
                }
            }
        }
    }

    async fn run(&self, query: &str, provider_name: &str) -> Result<PipelineResult> {
        let articles = self.search.search(query, self.search_limit).await;
        info!("📰 Retrieved {} articles", articles.len());

        let draft = self.drafter.draft(provider_name, query, &articles).await?;
        let final_answer = self
            .reviewer
            .review(
                provider_name,
                query,
                &draft.text,
                &draft.intent_analysis,
                draft.best_article.as_ref(),
            )
            .await;

        Ok(PipelineResult {
            best_article: draft.best_article,
            related_articles: draft.related_articles,
            relevance_score: draft.relevance_score,
            final_answer,
        })
    }
}
