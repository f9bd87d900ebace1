use clap::Parser;
use nq_core::PipelineResult;
use nq_inference::Gateway;
use nq_pipeline::Pipeline;
use nq_search::{EsSearch, DEFAULT_LIMIT};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ask questions about indexed news articles", long_about = None)]
struct Cli {
    /// The question to answer
    query: String,

    /// Model to answer with: Gemini, chatGPT or Claude
    #[arg(long, default_value = "Gemini")]
    model: String,

    /// How many articles to retrieve
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    let search = Arc::new(EsSearch::from_env());
    let gateway = Arc::new(Gateway::from_env());
    let pipeline = Pipeline::new(search, gateway).with_search_limit(cli.limit);

    info!("💬 Answering with {}", cli.model);
    let result = pipeline.process(&cli.query, &cli.model).await;
    render(&result);
}

fn render(result: &PipelineResult) {
    println!("\n{}\n", result.final_answer);

    if let Some(best) = &result.best_article {
        println!("📰 주요 기사: {}", best.title);
        println!("   📅 {}", best.published_date);
        println!("   📊 카테고리: {}", best.categories.join(", "));
        println!("   ⭐ score={:.2}", best.score);
        println!("   🔗 {}", best.url);
    }

    if !result.related_articles.is_empty() {
        println!("\n관련 기사:");
        for article in &result.related_articles {
            println!(
                "- {} (score={:.2}) {}",
                article.title, article.score, article.url
            );
        }
    }

    let counts = category_counts(result);
    if !counts.is_empty() {
        println!("\n카테고리 분포:");
        for (category, count) in counts {
            println!("- {}: {}", category, count);
        }
    }
}

/// Per-category article counts over the best and related articles.
fn category_counts(result: &PipelineResult) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    let articles = result
        .best_article
        .iter()
        .chain(result.related_articles.iter());
    for article in articles {
        for category in &article.categories {
            *counts.entry(category.clone()).or_insert(0) += 1;
        }
    }
    counts
}
