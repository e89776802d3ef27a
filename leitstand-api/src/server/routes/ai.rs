use crate::server::{Result, ServerError, ServerRouter, json::Json};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use leitstand_ai::flows::{
    suggest_tags::{SuggestTagsInput, SuggestTagsOutput, TagSuggester},
    summarize_article::{ArticleSummarizer, SummarizeArticleInput, SummarizeArticleOutput},
};
use serde::Deserialize;
use std::sync::Arc;

/// Admin tool endpoints. Unlike the repository's lazy summarization these
/// surface AI failures to the caller, since the editor is waiting on them.
pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_post(suggest_tags)
        .typed_post(summarize_article)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/ai/suggest-tags", rejection(ServerError))]
struct SuggestTagsPath();

async fn suggest_tags(
    SuggestTagsPath(): SuggestTagsPath,
    State(suggester): State<Arc<dyn TagSuggester>>,
    Json(input): Json<SuggestTagsInput>,
) -> Result<Json<SuggestTagsOutput>> {
    let output = suggester.suggest_tags(input).await?;

    Ok(Json(output))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/ai/summarize-article", rejection(ServerError))]
struct SummarizeArticlePath();

async fn summarize_article(
    SummarizeArticlePath(): SummarizeArticlePath,
    State(summarizer): State<Arc<dyn ArticleSummarizer>>,
    Json(input): Json<SummarizeArticleInput>,
) -> Result<Json<SummarizeArticleOutput>> {
    let output = summarizer.summarize_article(input).await?;

    Ok(Json(output))
}
