use crate::server::{Result, ServerError, ServerRouter, json::Json};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use leitstand_common::{
    model::comment::{Comment, CreateComment},
    slug::Slug,
};
use leitstand_store::{comments::CommentStore, posts::PostStore};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(get_post_comments)
        .typed_post(add_post_comment)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/{slug}/comments", rejection(ServerError))]
struct GetPostCommentsPath {
    slug: Slug,
}

async fn get_post_comments(
    GetPostCommentsPath { slug }: GetPostCommentsPath,
    State(posts): State<Arc<PostStore>>,
    State(comments): State<Arc<CommentStore>>,
) -> Result<Json<Vec<Comment>>> {
    let post = posts
        .get_by_slug(slug.get())
        .await
        .ok_or(ServerError::PostBySlugNotFound(slug))?;

    Ok(Json(comments.list_for_post(post.id).await))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/{slug}/comments", rejection(ServerError))]
struct AddPostCommentPath {
    slug: Slug,
}

async fn add_post_comment(
    AddPostCommentPath { slug }: AddPostCommentPath,
    State(posts): State<Arc<PostStore>>,
    State(comments): State<Arc<CommentStore>>,
    Json(create): Json<CreateComment>,
) -> Result<Json<Comment>> {
    let post = posts
        .get_by_slug(slug.get())
        .await
        .ok_or(ServerError::PostBySlugNotFound(slug))?;

    Ok(Json(comments.add(post.id, create).await))
}
