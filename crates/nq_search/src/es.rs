use async_trait::async_trait;
use nq_core::types::{UNCATEGORIZED, UNKNOWN_DATE};
use nq_core::{Article, ArticleSearch, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;
use tracing::{debug, warn};

/// Default number of hits requested per query.
pub const DEFAULT_LIMIT: usize = 7;

#[derive(Debug, Clone)]
pub struct EsConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub index: String,
}

impl EsConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("ES_URL").unwrap_or_else(|_| "http://localhost:9200".to_string()),
            api_key: env::var("ES_API_KEY").ok(),
            index: env::var("ES_INDEX").unwrap_or_else(|_| "news_articles".to_string()),
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    hits: HitsWrapper,
}

#[derive(Deserialize)]
struct HitsWrapper {
    hits: Vec<Hit>,
}

#[derive(Deserialize)]
struct Hit {
    #[serde(rename = "_score", default)]
    score: Option<f32>,
    #[serde(rename = "_source")]
    source: HitSource,
}

#[derive(Deserialize)]
struct HitSource {
    title: String,
    cleaned_content: String,
    url: String,
    #[serde(default)]
    published_date: Option<String>,
    #[serde(default)]
    categories: Option<Vec<String>>,
}

impl Hit {
    fn into_article(self) -> Article {
        let categories = match self.source.categories {
            Some(c) if !c.is_empty() => c,
            _ => vec![UNCATEGORIZED.to_string()],
        };
        Article {
            title: self.source.title,
            content: self.source.cleaned_content,
            url: self.source.url,
            published_date: self
                .source
                .published_date
                .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
            categories,
            score: self.score.unwrap_or(0.0),
        }
    }
}

/// Reduce the question to a plain keyword string for the fuzzy clause.
fn keywords(query: &str) -> String {
    query
        .replace('?', "")
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two-clause body: an exact-phrase match over the article body catches
/// near-verbatim questions, while the fuzzy multi-field match catches
/// questions phrased with different wording but overlapping vocabulary.
fn build_query(query: &str, size: usize) -> Value {
    json!({
        "query": {
            "bool": {
                "should": [
                    {
                        "match_phrase": {
                            "cleaned_content": {
                                "query": query,
                                "boost": 5,
                                "slop": 2
                            }
                        }
                    },
                    {
                        "multi_match": {
                            "query": keywords(query),
                            "fields": [
                                "title^3",
                                "title.ngram^2",
                                "cleaned_content^2",
                                "cleaned_content.ngram"
                            ],
                            "type": "best_fields",
                            "operator": "or",
                            "fuzziness": "AUTO"
                        }
                    }
                ],
                "minimum_should_match": 1
            }
        },
        "size": size,
        "sort": [{ "_score": "desc" }]
    })
}

pub struct EsSearch {
    client: Client,
    config: EsConfig,
}

impl EsSearch {
    pub fn new(config: EsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(EsConfig::from_env())
    }

    async fn search_index(&self, query: &str, limit: usize) -> Result<Vec<Article>> {
        let body = build_query(query, limit);
        let url = format!("{}/{}/_search", self.config.url, self.config.index);
        debug!("🔍 Searching {} for: {}", self.config.index, query);

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.header("Authorization", format!("ApiKey {}", key));
        }

        let response = request.send().await?.error_for_status()?;
        let parsed: SearchResponse = response.json().await?;
        Ok(parsed
            .hits
            .hits
            .into_iter()
            .map(Hit::into_article)
            .collect())
    }
}

#[async_trait]
impl ArticleSearch for EsSearch {
    async fn search(&self, query: &str, limit: usize) -> Vec<Article> {
        match self.search_index(query, limit).await {
            Ok(articles) => articles,
            Err(e) => {
                // A dead or misconfigured index degrades to an empty result;
                // the pipeline then answers from general knowledge.
                warn!("⚠️ Search failed, returning no articles: {}", e);
                Vec::new()
            }
        }
    }
}
