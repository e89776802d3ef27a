//! Shared doubles and request helpers for router-level tests.

use crate::server::ServerState;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, header},
    response::Response,
};
use http_body_util::BodyExt;
use leitstand_ai::{
    error::{AiError, Result},
    flows::{
        suggest_tags::{SuggestTagsInput, SuggestTagsOutput, TagSuggester},
        summarize_article::{ArticleSummarizer, SummarizeArticleInput, SummarizeArticleOutput},
    },
};
use leitstand_store::{comments::CommentStore, posts::PostStore, seed};
use serde_json::Value;
use std::sync::Arc;

pub(crate) const STUB_SUMMARY: &str = "Stubbed summary of the article.";

pub(crate) struct StubAi;

#[async_trait]
impl ArticleSummarizer for StubAi {
    async fn summarize_article(
        &self,
        _input: SummarizeArticleInput,
    ) -> Result<SummarizeArticleOutput> {
        Ok(SummarizeArticleOutput {
            summary: STUB_SUMMARY.to_owned(),
        })
    }
}

#[async_trait]
impl TagSuggester for StubAi {
    async fn suggest_tags(&self, _input: SuggestTagsInput) -> Result<SuggestTagsOutput> {
        Ok(SuggestTagsOutput {
            tags: vec!["robotics".to_owned(), "automation".to_owned()],
        })
    }
}

pub(crate) struct RateLimitedAi;

#[async_trait]
impl ArticleSummarizer for RateLimitedAi {
    async fn summarize_article(
        &self,
        _input: SummarizeArticleInput,
    ) -> Result<SummarizeArticleOutput> {
        Err(AiError::RateLimited {
            message: "quota exhausted".to_owned(),
        })
    }
}

#[async_trait]
impl TagSuggester for RateLimitedAi {
    async fn suggest_tags(&self, _input: SuggestTagsInput) -> Result<SuggestTagsOutput> {
        Err(AiError::RateLimited {
            message: "quota exhausted".to_owned(),
        })
    }
}

pub(crate) struct BrokenAi;

#[async_trait]
impl ArticleSummarizer for BrokenAi {
    async fn summarize_article(
        &self,
        _input: SummarizeArticleInput,
    ) -> Result<SummarizeArticleOutput> {
        Err(AiError::Api {
            status: 500,
            message: "provider down".to_owned(),
        })
    }
}

#[async_trait]
impl TagSuggester for BrokenAi {
    async fn suggest_tags(&self, _input: SuggestTagsInput) -> Result<SuggestTagsOutput> {
        Err(AiError::Api {
            status: 500,
            message: "provider down".to_owned(),
        })
    }
}

/// Seeded stores plus [`StubAi`] behind both trait slots.
pub(crate) fn seeded_state() -> ServerState {
    state_with_ai(Arc::new(StubAi))
}

pub(crate) fn state_with_ai<Ai>(ai: Arc<Ai>) -> ServerState
where
    Ai: ArticleSummarizer + TagSuggester + 'static,
{
    let posts = seed::posts();
    let comments = seed::comments(&posts);

    ServerState {
        posts: Arc::new(PostStore::with_posts(posts, ai.clone())),
        comments: Arc::new(CommentStore::with_comments(comments)),
        summarizer: ai.clone(),
        tag_suggester: ai,
    }
}

pub(crate) fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub(crate) fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub(crate) async fn response_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
