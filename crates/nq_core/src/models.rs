use async_trait::async_trait;

use crate::types::Article;
use crate::Result;

#[async_trait]
pub trait ArticleSearch: Send + Sync {
    /// Retrieve up to `limit` articles ranked by descending relevance.
    ///
    /// Retrieval failures degrade to an empty result rather than an error so
    /// that a broken search backend never aborts a query.
    async fn search(&self, query: &str, limit: usize) -> Vec<Article>;
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Send one prompt and return the model's text response.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
