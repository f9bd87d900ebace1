pub mod error;
pub mod models;
pub mod types;

pub use error::Error;
pub use models::{ArticleSearch, LlmProvider};
pub use types::{Article, PipelineResult, ResponseStrategy};

pub type Result<T> = std::result::Result<T, Error>;
