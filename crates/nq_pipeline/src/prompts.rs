//! Prompt templates for the query pipeline.
//!
//! Wording is part of the provider contract (the reviewer's marker phrase is
//! matched back out of model output), so templates change behavior, not just
//! tone.

use nq_core::Article;

/// Characters of article body given to the model as grounding context.
/// Counted in chars so multi-byte text never splits a code point.
pub const EXCERPT_CHARS: usize = 500;

/// How many ranked articles after the best one are returned to the caller.
pub const RELATED_LIMIT: usize = 8;

/// How many runner-up articles are named in the full-context prompt.
pub const FULL_CONTEXT_EXTRAS: usize = 2;

/// Reviewer output containing this phrase means "keep the draft".
pub const USE_ORIGINAL_MARKER: &str = "원본 답변 사용";

/// User-facing answer when the pipeline fails outright.
pub const PIPELINE_ERROR: &str = "오류가 발생했습니다.";

pub fn excerpt(content: &str) -> String {
    content.chars().take(EXCERPT_CHARS).collect()
}

pub fn intent_prompt(query: &str) -> String {
    format!(
        "다음 질문의 의도를 파악하고, 핵심 키워드와 찾아야 할 정보를 요약해 주세요:\n\
         질문: {}\n\n\
         출력 형식 예:\n\
         1. 질문 유형:\n\
         2. 핵심 키워드:\n\
         3. 필요한 정보:\n",
        query
    )
}

pub fn knowledge_prompt(intent_analysis: &str) -> String {
    format!(
        "당신은 AI 뉴스 챗봇입니다.\n\
         질문 분석:\n{}\n\
         기사가 없으므로 일반 지식으로 답변하세요.\n",
        intent_analysis
    )
}

pub fn hybrid_prompt(query: &str, intent_analysis: &str, best: &Article) -> String {
    format!(
        "당신은 AI 뉴스 챗봇입니다.\n\
         질문: {}\n\
         질문 분석:\n{}\n\n\
         관련성이 낮은 기사:\n\
         제목: {}\n\
         내용: {}\n\n\
         - 기사 일부와 일반 지식을 함께 활용\n\
         - 기사 정보와 일반 지식 구분\n",
        query,
        intent_analysis,
        best.title,
        excerpt(&best.content)
    )
}

pub fn full_context_prompt(
    query: &str,
    intent_analysis: &str,
    best: &Article,
    extras: &[Article],
) -> String {
    let mut extra_lines = String::new();
    for (i, article) in extras.iter().take(FULL_CONTEXT_EXTRAS).enumerate() {
        extra_lines.push_str(&format!(
            "- 추가기사{}: {} (score={:.2})\n",
            i + 1,
            article.title,
            article.score
        ));
    }

    format!(
        "당신은 AI 뉴스 챗봇입니다.\n\
         질문: {}\n\
         질문 분석:\n{}\n\n\
         주요 기사:\n\
         - 제목: {}\n\
         - 내용 일부: {}...\n\
         - score={:.2}\n\n\
         추가 기사:\n{}\n\
         가능하면 기사 내용 우선 활용, 필요한 경우 일반 지식.\n",
        query,
        intent_analysis,
        best.title,
        excerpt(&best.content),
        best.score,
        if extra_lines.is_empty() {
            "없음".to_string()
        } else {
            extra_lines
        }
    )
}

pub fn review_prompt_with_article(
    query: &str,
    intent_analysis: &str,
    best: &Article,
    draft: &str,
) -> String {
    format!(
        "답변 검토:\n\
         질문: {}\n\
         의도분석: {}\n\
         주요 기사: {} (score={:.2})\n\
         현재 답변: {}\n\n\
         답변이 적절한지 평가 후, 필요 시 개선된 최종 답만 제시.\n\
         불필요하면 '{}'만 출력.\n",
        query, intent_analysis, best.title, best.score, draft, USE_ORIGINAL_MARKER
    )
}

pub fn review_prompt_general(query: &str, intent_analysis: &str, draft: &str) -> String {
    format!(
        "답변 검토:\n\
         질문: {}\n\
         의도분석: {}\n\
         (기사 없음)\n\
         현재 답변: {}\n\n\
         답변이 적절한지 평가 후, 필요 시 개선된 최종 답만 제시.\n\
         불필요하면 '{}'만 출력.\n",
        query, intent_analysis, draft, USE_ORIGINAL_MARKER
    )
}
