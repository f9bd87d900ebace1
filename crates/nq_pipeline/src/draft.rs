use nq_core::{Article, ResponseStrategy, Result};
use nq_inference::{Gateway, ProviderId, UNKNOWN_MODEL};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::prompts;

/// Output of the drafting stage, consumed by the reviewer and the caller.
#[derive(Debug, Clone)]
pub struct Draft {
    pub best_article: Option<Article>,
    pub related_articles: Vec<Article>,
    pub relevance_score: f32,
    pub text: String,
    pub intent_analysis: String,
}

pub struct Drafter {
    gateway: Arc<Gateway>,
}

impl fmt::Debug for Drafter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drafter").field("gateway", &self.gateway).finish()
    }
}

impl Drafter {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// A model name outside the supported set never reaches the network;
    /// every call answers with the sentinel instead.
    async fn call_model(&self, provider: Option<ProviderId>, prompt: &str) -> Result<String> {
        match provider {
            Some(p) => self.gateway.invoke(p, prompt).await,
            None => Ok(UNKNOWN_MODEL.to_string()),
        }
    }

    /// One fixed prompt restating the question as type / keywords / needed
    /// information. The raw model text is kept verbatim as shared context.
    pub async fn analyze_intent(&self, provider_name: &str, query: &str) -> Result<String> {
        let provider = ProviderId::from_name(provider_name);
        self.call_model(provider, &prompts::intent_prompt(query)).await
    }

    pub async fn draft(
        &self,
        provider_name: &str,
        query: &str,
        articles: &[Article],
    ) -> Result<Draft> {
        let provider = ProviderId::from_name(provider_name);
        let intent_analysis = self.analyze_intent(provider_name, query).await?;

        let top_score = articles.first().map(|a| a.score).unwrap_or(0.0);
        let strategy = ResponseStrategy::select(articles.is_empty(), top_score);
        debug!("📝 Drafting with strategy {:?} (top score {:.2})", strategy, top_score);

        match strategy {
            ResponseStrategy::NoArticles => {
                let text = self
                    .call_model(provider, &prompts::knowledge_prompt(&intent_analysis))
                    .await?;
                Ok(Draft {
                    best_article: None,
                    related_articles: Vec::new(),
                    relevance_score: 0.0,
                    text,
                    intent_analysis,
                })
            }
            ResponseStrategy::Hybrid => {
                let best = articles[0].clone();
                let text = self
                    .call_model(
                        provider,
                        &prompts::hybrid_prompt(query, &intent_analysis, &best),
                    )
                    .await?;
                Ok(Draft {
                    relevance_score: best.score,
                    related_articles: related(articles),
                    best_article: Some(best),
                    text,
                    intent_analysis,
                })
            }
            ResponseStrategy::FullContext => {
                let best = articles[0].clone();
                let text = self
                    .call_model(
                        provider,
                        &prompts::full_context_prompt(query, &intent_analysis, &best, &articles[1..]),
                    )
                    .await?;
                Ok(Draft {
                    relevance_score: best.score,
                    related_articles: related(articles),
                    best_article: Some(best),
                    text,
                    intent_analysis,
                })
            }
        }
    }
}

/// Everything after the best hit, capped. The best article is element 0 of
/// the ranked list, so it can never appear here.
fn related(articles: &[Article]) -> Vec<Article> {
    articles
        .iter()
        .skip(1)
        .take(prompts::RELATED_LIMIT)
        .cloned()
        .collect()
}
