//! In-memory fakes for the search and provider seams, shared by the unit
//! tests in this crate.

use async_trait::async_trait;
use nq_core::{Article, ArticleSearch, Error, LlmProvider, Result};
use nq_inference::Gateway;
use std::sync::{Arc, Mutex};

/// Gateway with the given provider bound to the Gemini slot only.
pub fn gateway_with(provider: Arc<dyn LlmProvider>) -> Arc<Gateway> {
    Arc::new(Gateway::new(Some(provider), None, None))
}

/// Serves a canned ranked list, honoring the limit like a real index.
pub struct FakeSearch(pub Vec<Article>);

#[async_trait]
impl ArticleSearch for FakeSearch {
    async fn search(&self, _query: &str, limit: usize) -> Vec<Article> {
        self.0.iter().take(limit).cloned().collect()
    }
}

/// Reflects every prompt back as the response.
pub struct EchoProvider;

#[async_trait]
impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(prompt.to_string())
    }
}

/// Always answers with the same canned reply.
pub struct ScriptedProvider {
    reply: String,
}

impl ScriptedProvider {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
        }
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.reply.clone())
    }
}

/// Records every prompt it is given, answering with a fixed reply.
pub struct RecordingProvider {
    reply: String,
    seen: Mutex<Vec<String>>,
}

impl RecordingProvider {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for RecordingProvider {
    fn name(&self) -> &str {
        "recording"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        self.seen.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Fails every call, standing in for a provider outage.
pub struct FailingProvider;

#[async_trait]
impl LlmProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(Error::Provider("simulated provider failure".to_string()))
    }
}

/// Plays back replies in order; `None` entries (and exhaustion) fail the call.
pub struct SequenceProvider {
    replies: Mutex<Vec<Option<String>>>,
}

impl SequenceProvider {
    pub fn new(replies: Vec<Option<String>>) -> Self {
        Self {
            replies: Mutex::new(replies),
        }
    }
}

#[async_trait]
impl LlmProvider for SequenceProvider {
    fn name(&self) -> &str {
        "sequence"
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::Provider("no replies left".to_string()));
        }
        match replies.remove(0) {
            Some(reply) => Ok(reply),
            None => Err(Error::Provider("simulated provider failure".to_string())),
        }
    }
}
