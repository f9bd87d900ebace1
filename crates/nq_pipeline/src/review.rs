use nq_core::Article;
use nq_inference::{Gateway, ProviderId};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::prompts;

/// Second pass over a draft: the same model judges its own answer and either
/// improves it or signals that the draft should stand.
pub struct Reviewer {
    gateway: Arc<Gateway>,
}

impl fmt::Debug for Reviewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reviewer").field("gateway", &self.gateway).finish()
    }
}

impl Reviewer {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Never fails: an unsupported model name returns the built prompt
    /// unchanged, and a failed review call falls back to the draft.
    pub async fn review(
        &self,
        provider_name: &str,
        query: &str,
        draft: &str,
        intent_analysis: &str,
        best_article: Option<&Article>,
    ) -> String {
        let prompt = match best_article {
            Some(article) => {
                prompts::review_prompt_with_article(query, intent_analysis, article, draft)
            }
            None => prompts::review_prompt_general(query, intent_analysis, draft),
        };

        let provider = match ProviderId::from_name(provider_name) {
            Some(p) => p,
            None => return prompt,
        };

        match self.gateway.invoke(provider, &prompt).await {
            Ok(improved) if improved.contains(prompts::USE_ORIGINAL_MARKER) => {
                debug!("✅ Reviewer kept the original draft");
                draft.to_string()
            }
            Ok(improved) => improved,
            Err(e) => {
                warn!("⚠️ Review call failed, keeping the draft: {}", e);
                draft.to_string()
            }
        }
    }
}
