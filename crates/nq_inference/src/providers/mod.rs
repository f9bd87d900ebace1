use nq_core::{LlmProvider, Result};
use std::env;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

pub mod claude;
pub mod gemini;
pub mod openai;

pub use claude::ClaudeProvider;
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

/// Draft text returned when the requested model name is not one of ours.
pub const UNKNOWN_MODEL: &str = "알 수 없는 모델";

/// Fixed responses for providers whose credentials were missing at startup.
pub const GEMINI_MISCONFIGURED: &str = "Gemini 모델 오류";
pub const OPENAI_MISCONFIGURED: &str = "OpenAI 설정 오류";
pub const CLAUDE_MISCONFIGURED: &str = "Anthropic 설정 오류";

/// The closed set of supported LLM backends. Adding a provider means adding
/// a variant here and a slot in [`Gateway`]; callers stay unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderId {
    Gemini,
    ChatGpt,
    Claude,
}

impl ProviderId {
    /// Parse the model label the caller selected. Labels are the exact
    /// strings offered in the model picker, so matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Gemini" => Some(Self::Gemini),
            "chatGPT" => Some(Self::ChatGpt),
            "Claude" => Some(Self::Claude),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gemini => "Gemini",
            Self::ChatGpt => "chatGPT",
            Self::Claude => "Claude",
        }
    }
}

/// One uniform call over three provider wire shapes. Purely a call-shape
/// adapter: no retries, caching, or rate limiting.
pub struct Gateway {
    gemini: Option<Arc<dyn LlmProvider>>,
    openai: Option<Arc<dyn LlmProvider>>,
    claude: Option<Arc<dyn LlmProvider>>,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("gemini", &self.gemini.is_some())
            .field("openai", &self.openai.is_some())
            .field("claude", &self.claude.is_some())
            .finish()
    }
}

impl Gateway {
    pub fn new(
        gemini: Option<Arc<dyn LlmProvider>>,
        openai: Option<Arc<dyn LlmProvider>>,
        claude: Option<Arc<dyn LlmProvider>>,
    ) -> Self {
        Self {
            gemini,
            openai,
            claude,
        }
    }

    /// Bind each provider whose API key is present; missing keys disable
    /// that provider only.
    pub fn from_env() -> Self {
        let gemini = match env::var("GEMINI_API_KEY") {
            Ok(key) => Some(Arc::new(GeminiProvider::new(key)) as Arc<dyn LlmProvider>),
            Err(_) => {
                warn!("⚠️ GEMINI_API_KEY not set, Gemini disabled");
                None
            }
        };
        let openai = match env::var("OPENAI_API_KEY") {
            Ok(key) => Some(Arc::new(OpenAiProvider::new(key)) as Arc<dyn LlmProvider>),
            Err(_) => {
                warn!("⚠️ OPENAI_API_KEY not set, chatGPT disabled");
                None
            }
        };
        let claude = match env::var("ANTHROPIC_API_KEY") {
            Ok(key) => Some(Arc::new(ClaudeProvider::new(key)) as Arc<dyn LlmProvider>),
            Err(_) => {
                warn!("⚠️ ANTHROPIC_API_KEY not set, Claude disabled");
                None
            }
        };
        Self::new(gemini, openai, claude)
    }

    /// Send one prompt to the selected provider.
    ///
    /// A provider left unbound at startup answers with its fixed
    /// misconfiguration string so one bad credential never takes down
    /// requests routed to the others. Transport and model errors propagate.
    pub async fn invoke(&self, provider: ProviderId, prompt: &str) -> Result<String> {
        let (slot, misconfigured) = match provider {
            ProviderId::Gemini => (&self.gemini, GEMINI_MISCONFIGURED),
            ProviderId::ChatGpt => (&self.openai, OPENAI_MISCONFIGURED),
            ProviderId::Claude => (&self.claude, CLAUDE_MISCONFIGURED),
        };
        match slot {
            Some(model) => {
                debug!("🤖 Invoking {} ({} chars)", provider.name(), prompt.chars().count());
                model.generate(prompt).await
            }
            None => {
                warn!("⚠️ {} is not configured", provider.name());
                Ok(misconfigured.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_names_round_trip() {
        for id in [ProviderId::Gemini, ProviderId::ChatGpt, ProviderId::Claude] {
            assert_eq!(ProviderId::from_name(id.name()), Some(id));
        }
    }

    #[test]
    fn test_unsupported_provider_names() {
        assert_eq!(ProviderId::from_name("gemini"), None);
        assert_eq!(ProviderId::from_name("GPT-5"), None);
        assert_eq!(ProviderId::from_name(""), None);
    }

    #[tokio::test]
    async fn test_unbound_providers_return_error_strings() {
        let gateway = Gateway::new(None, None, None);

        let gemini = gateway.invoke(ProviderId::Gemini, "질문").await.unwrap();
        assert_eq!(gemini, GEMINI_MISCONFIGURED);

        let openai = gateway.invoke(ProviderId::ChatGpt, "질문").await.unwrap();
        assert_eq!(openai, OPENAI_MISCONFIGURED);

        let claude = gateway.invoke(ProviderId::Claude, "질문").await.unwrap();
        assert_eq!(claude, CLAUDE_MISCONFIGURED);
    }
}
